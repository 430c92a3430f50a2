use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Badge/name, tagline, nav tabs, and a rule underneath.
pub const HEADER_HEIGHT: u16 = 4;
pub const STATUS_HEIGHT: u16 = 1;
/// Blank columns on each side of the page.
pub const PAGE_MARGIN: u16 = 2;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Width of the scrolling page for a terminal `width` cells wide.
pub fn page_width(width: u16) -> u16 {
    width.saturating_sub(PAGE_MARGIN * 2).max(1)
}

/// Rows of page visible for a terminal `height` rows tall.
pub fn body_height(height: u16) -> u16 {
    height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT).max(1)
}
