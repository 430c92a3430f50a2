use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::header::{nav_tab_at, NAV_ROW};
use crate::ui::layout::{compute_layout, PAGE_MARGIN};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

/// Rows per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Headline { generation, text } => {
            // stale updates from a superseded run
            if generation == state.headline_generation {
                state.set_headline(text);
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    let blink = state.cursor_visible();
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.cursor_visible() != blink {
        state.dirty = true;
    }
    if state.step_scroll() {
        state.dirty = true;
    }
    if state.step_bars() {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.resize(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The acknowledgment popup swallows the next key
    if state.notice.take().is_some() {
        return vec![];
    }

    if let Some(field) = state.form.active {
        handle_form_key(state, field, key);
        return vec![];
    }

    let page_rows = state.body_height().saturating_sub(1).max(1) as i32;
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('r') => return vec![Action::RestartHeadline],
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => state.jump_to(state.section.next()),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            state.jump_to(state.section.prev())
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(section) = Section::from_index(c as usize - '1' as usize) {
                state.jump_to(section);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => state.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => state.scroll_by(page_rows),
        KeyCode::PageUp => state.scroll_by(-page_rows),
        KeyCode::Home | KeyCode::Char('g') => state.scroll_by(-(state.max_scroll() as i32)),
        KeyCode::End | KeyCode::Char('G') => state.scroll_by(state.max_scroll() as i32),
        KeyCode::Char('[') => state.cycle_project(false),
        KeyCode::Char(']') => state.cycle_project(true),
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Enter => {
            state.form.active = Some(FormField::Name);
            state.jump_to(Section::Contact);
        }
        _ => {}
    }
    vec![]
}

fn handle_form_key(state: &mut AppState, field: FormField, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.form.active = None,
        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(),
        KeyCode::Enter if field == FormField::Message => submit_form(state),
        KeyCode::Enter => state.form.focus_next(),
        _ => {
            let Some(input) = state.form.active_input() else {
                return;
            };
            match key.code {
                KeyCode::Backspace => input.delete_back(),
                KeyCode::Delete => input.delete_forward(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_home(),
                KeyCode::End => input.move_end(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.insert_char(c)
                }
                _ => {}
            }
        }
    }
}

fn submit_form(state: &mut AppState) {
    match state.form.submit() {
        Ok(()) => {
            info!("Contact form submitted locally");
            state.notice = Some(CONTACT_ACK.to_string());
        }
        Err(e) => debug!(error = %e, "Contact form rejected"),
    }
    state.dirty = true;
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let layout = compute_layout(Rect::new(0, 0, state.size.0, state.size.1));
    let point = page_point(state, layout.body, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_ROWS),
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_ROWS),
        MouseEventKind::Moved => {
            let hovered = point.and_then(|(x, y)| state.page.project_at(x, y));
            state.select_project(hovered);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if state.notice.take().is_some() {
                state.dirty = true;
                return vec![];
            }
            if mouse.row == layout.header.y + NAV_ROW {
                if let Some(section) = nav_tab_at(mouse.column) {
                    state.form.active = None;
                    state.jump_to(section);
                }
                return vec![];
            }
            if let Some((x, y)) = point {
                handle_page_click(state, x, y);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_page_click(state: &mut AppState, x: u16, y: u16) {
    if let Some(field) = state.page.field_at(x, y) {
        state.form.active = Some(field);
    } else if state.page.contact.button.contains(Position::new(x, y)) {
        submit_form(state);
    } else if let Some(index) = state.page.project_at(x, y) {
        state.select_project(Some(index));
    } else {
        state.form.active = None;
    }
    state.dirty = true;
}

/// Map a terminal cell inside the body to page coordinates.
fn page_point(state: &AppState, body: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
    if !body.contains(Position::new(column, row)) {
        return None;
    }
    let x = column.checked_sub(body.x + PAGE_MARGIN)?;
    let y = (row - body.y).saturating_add(state.scroll);
    (x < state.page.width && y < state.page.height).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), (100, 30))
    }

    fn key(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c));
        }
    }

    fn mouse(state: &mut AppState, kind: MouseEventKind, column: u16, row: u16) {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        );
    }

    /// Terminal cell for page point `(x, y)` at the current scroll.
    fn screen(state: &AppState, x: u16, y: u16) -> (u16, u16) {
        let body = compute_layout(Rect::new(0, 0, state.size.0, state.size.1)).body;
        (body.x + PAGE_MARGIN + x, body.y + y - state.scroll)
    }

    fn settle(state: &mut AppState) {
        for _ in 0..200 {
            handle_event(state, AppEvent::Tick);
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert_eq!(key(&mut state, KeyCode::Char('q')), vec![Action::Quit]);

        state.form.active = Some(FormField::Name);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(ctrl_c)));
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = state();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handle_event(&mut state, AppEvent::Terminal(CEvent::Key(release))).is_empty());
    }

    #[test]
    fn test_restart_key() {
        let mut state = state();
        assert_eq!(key(&mut state, KeyCode::Char('r')), vec![Action::RestartHeadline]);
    }

    #[test]
    fn test_number_key_scrolls_smoothly_to_section() {
        let mut state = state();
        key(&mut state, KeyCode::Char('3'));
        assert_eq!(state.section, Section::Projects);
        assert_eq!(state.scroll, 0);

        handle_event(&mut state, AppEvent::Tick);
        assert!(state.scroll > 0);
        settle(&mut state);
        assert_eq!(state.scroll, state.page.offset(Section::Projects));
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut state = state();
        key(&mut state, KeyCode::Tab);
        assert_eq!(state.section, Section::Skills);
        key(&mut state, KeyCode::BackTab);
        key(&mut state, KeyCode::BackTab);
        assert_eq!(state.section, Section::Contact);
    }

    #[test]
    fn test_form_editing_captures_keys() {
        let mut state = state();
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.form.active, Some(FormField::Name));
        assert_eq!(state.section, Section::Contact);

        type_text(&mut state, "qt");
        assert_eq!(state.form.name.text, "qt");
        key(&mut state, KeyCode::Backspace);
        assert_eq!(state.form.name.text, "q");

        key(&mut state, KeyCode::Enter);
        assert_eq!(state.form.active, Some(FormField::Email));
        key(&mut state, KeyCode::Esc);
        assert_eq!(state.form.active, None);
        assert_eq!(key(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
    }

    #[test]
    fn test_submit_shows_ack_and_next_key_dismisses() {
        let mut state = state();
        key(&mut state, KeyCode::Enter);
        type_text(&mut state, "Ada");
        key(&mut state, KeyCode::Tab);
        type_text(&mut state, "ada@example.com");
        key(&mut state, KeyCode::Tab);
        type_text(&mut state, "Hello!");
        key(&mut state, KeyCode::Enter);

        assert_eq!(state.notice.as_deref(), Some(CONTACT_ACK));
        assert!(state.form.name.text.is_empty());
        assert_eq!(state.form.active, None);

        // dismissing does not also act on the key
        assert!(key(&mut state, KeyCode::Char('q')).is_empty());
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_invalid_submit_keeps_input() {
        let mut state = state();
        key(&mut state, KeyCode::Enter);
        type_text(&mut state, "Ada");
        state.form.active = Some(FormField::Message);
        type_text(&mut state, "hi");
        key(&mut state, KeyCode::Enter);

        assert_eq!(state.notice, None);
        assert_eq!(state.form.error, Some(FormError::Missing(FormField::Email)));
        assert_eq!(state.form.active, Some(FormField::Email));
        assert_eq!(state.form.name.text, "Ada");
    }

    #[test]
    fn test_stale_headline_updates_are_ignored() {
        let mut state = state();
        state.headline_generation = 2;
        handle_event(
            &mut state,
            AppEvent::Headline {
                generation: 1,
                text: "Old".into(),
            },
        );
        assert_eq!(state.headline, "");
        handle_event(
            &mut state,
            AppEvent::Headline {
                generation: 2,
                text: "N".into(),
            },
        );
        assert_eq!(state.headline, "N");
        assert!(state.dirty);
    }

    #[test]
    fn test_blink_marks_dirty() {
        let mut state = state();
        // bars already full, so only the cursor can mark the frame dirty
        state.bar_fill = state.config.content.skills.iter().map(|s| s.pct).collect();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
        for _ in 0..9 {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert!(!state.cursor_visible());
        assert!(state.dirty);
    }

    #[test]
    fn test_click_nav_tab() {
        let mut state = state();
        let header = compute_layout(Rect::new(0, 0, 100, 30)).header;
        // " Projects " is the third tab
        let column = PAGE_MARGIN + " About ".len() as u16 + 1 + " Skills ".len() as u16 + 1 + 2;
        mouse(
            &mut state,
            MouseEventKind::Down(MouseButton::Left),
            column,
            header.y + NAV_ROW,
        );
        assert_eq!(state.section, Section::Projects);
        assert!(state.scroll_target > 0);
    }

    #[test]
    fn test_hover_raises_project_card() {
        let mut state = state();
        state.scroll_by(state.page.offset(Section::Projects) as i32);
        let card = state.page.projects.cards[1];
        let (column, row) = screen(&state, card.x + 1, card.y + 1);

        mouse(&mut state, MouseEventKind::Moved, column, row);
        assert_eq!(state.selected_project, Some(1));

        let (column, row) = screen(&state, 0, state.page.projects.heading.y);
        mouse(&mut state, MouseEventKind::Moved, column, row);
        assert_eq!(state.selected_project, None);
    }

    #[test]
    fn test_click_focuses_form_field() {
        let mut state = state();
        state.scroll_by(state.max_scroll() as i32);
        let field = state.page.contact.fields[1];
        let (column, row) = screen(&state, field.x + 1, field.y + 1);

        mouse(&mut state, MouseEventKind::Down(MouseButton::Left), column, row);
        assert_eq!(state.form.active, Some(FormField::Email));
    }

    #[test]
    fn test_wheel_scrolls() {
        let mut state = state();
        mouse(&mut state, MouseEventKind::ScrollDown, 10, 10);
        assert_eq!(state.scroll, WHEEL_ROWS as u16);
        mouse(&mut state, MouseEventKind::ScrollUp, 10, 10);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut state = state();
        let tall = state.page.height;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(40, 20)));
        assert_eq!(state.size, (40, 20));
        assert!(state.page.height > tall);
    }
}
