mod contact;
mod education;
pub mod header;
mod hero;
mod input_box;
pub mod layout;
pub mod page;
mod projects;
mod skills;
mod status_bar;
pub mod theme;

use crate::app::state::AppState;
use layout::PAGE_MARGIN;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use theme::Theme;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new(state.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.page()), area);

    let app_layout = layout::compute_layout(area);
    header::render(frame, app_layout.header, state, &theme);

    let page = page::render_page(state, &theme);
    let body = app_layout.body;
    let dest = Rect {
        x: body.x + PAGE_MARGIN,
        width: body.width.saturating_sub(PAGE_MARGIN * 2),
        ..body
    };
    page::blit(&page, state.scroll, dest, frame.buffer_mut());

    status_bar::render(frame, app_layout.status_bar, state, &theme);

    if let Some(notice) = &state.notice {
        render_notice(frame, area, notice, &theme);
    }
}

/// Centered modal with a dismiss hint.
fn render_notice(frame: &mut Frame, area: Rect, notice: &str, theme: &Theme) {
    let hint = "press any key";
    let width = (notice.width().max(hint.width()) as u16 + 6).min(area.width);
    let height = 5.min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_raised())
        .style(theme.card());
    let lines = vec![
        Line::styled(notice, theme.title()),
        Line::default(),
        Line::styled(hint, theme.muted()),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        popup,
    );
}
