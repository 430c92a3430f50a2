use crate::app::state::{AppState, Section};
use crate::config::ThemeMode;
use crate::ui::layout::PAGE_MARGIN;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Row of the header holding the nav tabs.
pub const NAV_ROW: u16 = 2;
const TAB_GAP: u16 = 1;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let profile = &state.config.profile;
    let inner = Rect {
        x: area.x + PAGE_MARGIN,
        width: area.width.saturating_sub(PAGE_MARGIN * 2),
        ..area
    };

    let mode = match state.theme {
        ThemeMode::Dark => "☾ dark",
        ThemeMode::Light => "☀ light",
    };
    let brand = Line::from(vec![
        Span::styled(format!(" {} ", profile.initials()), theme.badge()),
        Span::raw(" "),
        Span::styled(profile.name.as_str(), theme.title()),
    ]);
    let mut nav = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            nav.push(Span::raw(" ".repeat(TAB_GAP as usize)));
        }
        let style = if *section == state.section {
            theme.nav_active()
        } else {
            theme.nav()
        };
        nav.push(Span::styled(tab_label(*section), style));
    }
    let lines = vec![
        brand,
        Line::styled(profile.tagline.as_str(), theme.muted()),
        Line::from(nav),
        Line::styled("─".repeat(inner.width as usize), theme.border()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let row = Rect { height: 1, ..inner };
    frame.render_widget(
        Paragraph::new(Line::styled(mode, theme.muted())).alignment(Alignment::Right),
        row,
    );
}

fn tab_label(section: Section) -> String {
    format!(" {} ", section.title())
}

/// The nav tab under terminal column `x`, if any.
pub fn nav_tab_at(x: u16) -> Option<Section> {
    let mut start = PAGE_MARGIN;
    for section in Section::ALL {
        let width = tab_label(section).len() as u16;
        if (start..start + width).contains(&x) {
            return Some(section);
        }
        start += width + TAB_GAP;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_tab_hit_testing() {
        // "  " + " About " + " " + " Skills " ...
        assert_eq!(nav_tab_at(0), None);
        assert_eq!(nav_tab_at(2), Some(Section::About));
        assert_eq!(nav_tab_at(8), Some(Section::About));
        assert_eq!(nav_tab_at(9), None);
        assert_eq!(nav_tab_at(10), Some(Section::Skills));
        assert_eq!(nav_tab_at(500), None);
    }
}
