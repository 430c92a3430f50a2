use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        theme.status_bar(),
    ));

    // Section indicator, padded to the right edge
    let section = format!(" [{}] ", state.section.title().to_uppercase());
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + section.width());
    parts.push(Span::styled(" ".repeat(remaining), theme.status_bar()));
    parts.push(Span::styled(section, theme.status_bar().add_modifier(Modifier::BOLD)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
