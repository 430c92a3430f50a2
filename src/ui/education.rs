use crate::app::state::AppState;
use crate::ui::page::render_heading;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(buf: &mut Buffer, state: &AppState, theme: &Theme) {
    let layout = &state.page.education;
    render_heading(buf, layout.heading, "Education & Experience", theme);

    let entries = state
        .config
        .content
        .education
        .iter()
        .zip(&layout.subtitles)
        .zip(&layout.details);
    for (rect, ((entry, subtitle), detail)) in layout.cards.iter().zip(entries) {
        let block = theme.card_block(false);
        let inner = block.inner(*rect);
        block.render(*rect, buf);

        let mut lines = vec![Line::styled(entry.label.as_str(), theme.title())];
        lines.extend(subtitle.iter().map(|l| Line::styled(l.as_str(), theme.accent())));
        lines.push(Line::default());
        lines.extend(detail.iter().map(|l| Line::styled(l.as_str(), theme.muted())));
        Paragraph::new(lines).render(inner, buf);
    }
}
