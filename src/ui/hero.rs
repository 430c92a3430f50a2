use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const CURSOR: &str = "█";

pub fn render(buf: &mut Buffer, state: &AppState, theme: &Theme) {
    let layout = &state.page.about;
    let profile = &state.config.profile;

    let block = theme.card_block(false);
    let inner = block.inner(layout.hero);
    block.render(layout.hero, buf);

    let mut lines = vec![
        Line::styled("Hi, I'm", theme.muted()),
        Line::from(vec![
            Span::styled(profile.name.as_str(), theme.title()),
            Span::styled(" · ", theme.muted()),
            Span::styled(profile.role.as_str(), theme.headline()),
        ]),
        Line::styled(profile.tagline.as_str(), theme.muted()),
        Line::default(),
    ];
    lines.extend(
        layout
            .summary
            .iter()
            .map(|l| Line::styled(l.as_str(), theme.text())),
    );
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("✉ ", theme.muted()),
        Span::styled(profile.email.as_str(), theme.link()),
        Span::raw("   "),
        Span::styled("in ", theme.muted()),
        Span::styled(profile.linkedin.as_str(), theme.link()),
        Span::raw("   "),
        Span::styled("⌥ ", theme.muted()),
        Span::styled(profile.github.as_str(), theme.link()),
    ]));
    lines.push(headline_line(state, theme));

    Paragraph::new(lines).render(inner, buf);

    for (rect, card) in layout.highlights.iter().zip(&state.config.content.highlights) {
        let block = theme.card_block(false);
        let inner = block.inner(*rect);
        block.render(*rect, buf);
        Paragraph::new(vec![
            Line::styled(card.label.as_str(), theme.muted()),
            Line::styled(card.title.as_str(), theme.title()),
            Line::styled(card.detail.as_str(), theme.muted()),
        ])
        .render(inner, buf);
    }
}

/// `Working on: <typed text>` with a blinking block cursor.
fn headline_line<'a>(state: &'a AppState, theme: &Theme) -> Line<'a> {
    let cursor = if state.cursor_visible() { CURSOR } else { " " };
    Line::from(vec![
        Span::styled(state.config.headline.prefix.as_str(), theme.muted()),
        Span::raw(" "),
        Span::styled(state.headline.as_str(), theme.headline()),
        Span::styled(cursor, theme.headline()),
    ])
}
