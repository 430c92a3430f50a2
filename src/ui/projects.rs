use crate::app::state::AppState;
use crate::ui::page::render_heading;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(buf: &mut Buffer, state: &AppState, theme: &Theme) {
    let layout = &state.page.projects;
    render_heading(buf, layout.heading, "Projects", theme);

    for (i, ((rect, project), desc)) in layout
        .cards
        .iter()
        .zip(&state.config.content.projects)
        .zip(&layout.descs)
        .enumerate()
    {
        // the hovered/selected card is raised
        let raised = state.selected_project == Some(i);
        let block = theme.card_block(raised);
        let inner = block.inner(*rect);
        block.render(*rect, buf);

        let title_style = if raised { theme.heading() } else { theme.title() };
        let mut lines = vec![
            Line::styled(project.tech.as_str(), theme.muted()),
            Line::styled(project.title.as_str(), title_style),
        ];
        lines.extend(desc.iter().map(|l| Line::styled(l.as_str(), theme.text())));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Demo ↗", theme.link()),
            Span::raw("   "),
            Span::styled("Code ↗", theme.link()),
        ]));
        Paragraph::new(lines).render(inner, buf);
    }
}
