use crate::config::{AppConfig, ThemeMode};
use crate::ui::page::PageLayout;
use chrono::Datelike;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// 0-based; out of range yields `None`.
    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

/// Single-line editable text with a byte cursor on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text before the cursor, for placing the drawn cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in your {0}")]
    Missing(FormField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub const CONTACT_ACK: &str = "Thanks — your message was noted (demo).";

/// The contact form. Submitting only validates and acknowledges locally;
/// nothing leaves the process.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: InputState,
    pub email: InputState,
    pub message: InputState,
    pub active: Option<FormField>,
    pub error: Option<FormError>,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &InputState {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut InputState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn active_input(&mut self) -> Option<&mut InputState> {
        let field = self.active?;
        Some(self.field_mut(field))
    }

    pub fn focus_next(&mut self) {
        self.active = Some(match self.active {
            None | Some(FormField::Message) => FormField::Name,
            Some(FormField::Name) => FormField::Email,
            Some(FormField::Email) => FormField::Message,
        });
    }

    pub fn focus_prev(&mut self) {
        self.active = Some(match self.active {
            None | Some(FormField::Name) => FormField::Message,
            Some(FormField::Email) => FormField::Name,
            Some(FormField::Message) => FormField::Email,
        });
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            if self.field(field).text.trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !is_plausible_email(self.email.text.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate, then clear the form. On error the input is kept and focus
    /// moves to the offending field.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if let Err(e) = self.validate() {
            self.active = Some(match e {
                FormError::Missing(field) => field,
                FormError::InvalidEmail => FormField::Email,
            });
            self.error = Some(e.clone());
            return Err(e);
        }
        for field in FormField::ALL {
            self.field_mut(field).clear();
        }
        self.active = None;
        self.error = None;
        Ok(())
    }
}

fn is_plausible_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub theme: ThemeMode,
    pub page: PageLayout,
    /// Terminal size in cells.
    pub size: (u16, u16),
    pub scroll: u16,
    pub scroll_target: u16,
    pub section: Section,
    pub headline: String,
    /// Bumped on every headline restart; updates from older runs are ignored.
    pub headline_generation: u64,
    pub selected_project: Option<usize>,
    /// Animated fill per skill, in percent.
    pub bar_fill: Vec<u8>,
    pub form: ContactForm,
    /// Modal acknowledgment; any key dismisses it.
    pub notice: Option<String>,
    pub tick_count: u64,
    pub year: i32,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, size: (u16, u16)) -> Self {
        let page = PageLayout::compute(&config, crate::ui::layout::page_width(size.0));
        let bar_fill = vec![0; config.content.skills.len()];
        Self {
            theme: config.ui.theme,
            page,
            size,
            scroll: 0,
            scroll_target: 0,
            section: Section::About,
            headline: String::new(),
            headline_generation: 0,
            selected_project: None,
            bar_fill,
            form: ContactForm::default(),
            notice: None,
            tick_count: 0,
            year: chrono::Local::now().year(),
            should_quit: false,
            dirty: true,
            config,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size.0 != width {
            self.page = PageLayout::compute(&self.config, crate::ui::layout::page_width(width));
        }
        self.size = (width, height);
        let max = self.max_scroll();
        self.scroll = self.scroll.min(max);
        self.scroll_target = self.scroll_target.min(max);
        self.dirty = true;
    }

    pub fn body_height(&self) -> u16 {
        crate::ui::layout::body_height(self.size.1)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page.height.saturating_sub(self.body_height())
    }

    /// Start scrolling towards `section`; the tick does the moving.
    pub fn jump_to(&mut self, section: Section) {
        self.section = section;
        self.scroll_target = self.page.offset(section).min(self.max_scroll());
        self.dirty = true;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll_target as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll_target = target as u16;
        self.scroll = self.scroll_target;
        self.section = self.page.section_at(self.scroll_target);
        self.dirty = true;
    }

    /// Move one tick closer to the scroll target. Covers a third of the
    /// remaining distance, but at least `scroll_step` rows.
    pub fn step_scroll(&mut self) -> bool {
        if self.scroll == self.scroll_target {
            return false;
        }
        let distance = self.scroll.abs_diff(self.scroll_target);
        let step = (distance / 3).max(self.config.ui.scroll_step.max(1)).min(distance);
        if self.scroll < self.scroll_target {
            self.scroll += step;
        } else {
            self.scroll -= step;
        }
        true
    }

    /// True when any row of `section` is inside the viewport.
    pub fn is_visible(&self, section: Section) -> bool {
        let area = self.page.area(section);
        let top = self.scroll;
        let bottom = self.scroll.saturating_add(self.body_height());
        area.y < bottom && area.bottom() > top
    }

    /// Grow skill bars towards their targets once Skills has been seen.
    pub fn step_bars(&mut self) -> bool {
        if !self.is_visible(Section::Skills) {
            return false;
        }
        let step = self.config.ui.bar_step.max(1);
        let mut changed = false;
        for (fill, skill) in self.bar_fill.iter_mut().zip(&self.config.content.skills) {
            let target = skill.pct.min(100);
            if *fill < target {
                *fill = fill.saturating_add(step).min(target);
                changed = true;
            }
        }
        changed
    }

    pub fn set_headline(&mut self, text: String) {
        if self.headline != text {
            self.headline = text;
            self.dirty = true;
        }
    }

    /// Ticks per half blink period (about 500ms).
    fn blink_ticks(&self) -> u64 {
        (500 / self.config.ui.tick_ms.max(1)).max(1)
    }

    pub fn cursor_visible(&self) -> bool {
        (self.tick_count / self.blink_ticks()) % 2 == 0
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.dirty = true;
    }

    pub fn select_project(&mut self, index: Option<usize>) {
        let index = index.filter(|i| *i < self.config.content.projects.len());
        if self.selected_project != index {
            self.selected_project = index;
            self.dirty = true;
        }
    }

    pub fn cycle_project(&mut self, forward: bool) {
        let len = self.config.content.projects.len();
        if len == 0 {
            return;
        }
        let next = match (self.selected_project, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.select_project(Some(next));
        if !self.is_visible(Section::Projects) {
            self.jump_to(Section::Projects);
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(field) = self.form.active {
            return format!("Editing {} · Tab next field · Enter send · Esc done", field);
        }
        "Tab/1-5 sections · ↑↓ scroll · [ ] projects · Enter contact · t theme · r replay · q quit"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), (100, 30))
    }

    fn type_into(form: &mut ContactForm, field: FormField, text: &str) {
        for c in text.chars() {
            form.field_mut(field).insert_char(c);
        }
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::About.next(), Section::Skills);
        assert_eq!(Section::Contact.next(), Section::About);
        assert_eq!(Section::About.prev(), Section::Contact);
        assert_eq!(Section::from_index(2), Some(Section::Projects));
        assert_eq!(Section::from_index(5), None);
    }

    #[test]
    fn test_input_editing_multibyte() {
        let mut input = InputState::default();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hllo");
        assert_eq!(input.before_cursor(), "h");
        input.delete_forward();
        assert_eq!(input.text, "hlo");
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_form_requires_all_fields() {
        let mut form = ContactForm::default();
        type_into(&mut form, FormField::Name, "Ada");
        assert_eq!(form.submit(), Err(FormError::Missing(FormField::Email)));
        assert_eq!(form.active, Some(FormField::Email));
        assert_eq!(form.name.text, "Ada");
    }

    #[test]
    fn test_form_rejects_bad_email() {
        let mut form = ContactForm::default();
        type_into(&mut form, FormField::Name, "Ada");
        type_into(&mut form, FormField::Email, "ada.example.com");
        type_into(&mut form, FormField::Message, "hi");
        assert_eq!(form.submit(), Err(FormError::InvalidEmail));
        assert_eq!(
            form.error.as_ref().map(ToString::to_string),
            Some("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_form_submit_clears() {
        let mut form = ContactForm::default();
        type_into(&mut form, FormField::Name, "Ada");
        type_into(&mut form, FormField::Email, "ada@example.com");
        type_into(&mut form, FormField::Message, "Hello there");
        form.active = Some(FormField::Message);
        assert_eq!(form.submit(), Ok(()));
        assert!(form.name.text.is_empty());
        assert!(form.message.text.is_empty());
        assert_eq!(form.active, None);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_form_focus_wraps() {
        let mut form = ContactForm::default();
        form.focus_next();
        assert_eq!(form.active, Some(FormField::Name));
        form.focus_prev();
        assert_eq!(form.active, Some(FormField::Message));
        form.focus_next();
        assert_eq!(form.active, Some(FormField::Name));
    }

    #[test]
    fn test_jump_scrolls_smoothly() {
        let mut state = state();
        state.jump_to(Section::Projects);
        let target = state.scroll_target;
        assert!(target > 0);
        assert_eq!(state.scroll, 0);

        let mut steps = 0;
        let mut last = state.scroll;
        while state.step_scroll() {
            assert!(state.scroll > last);
            last = state.scroll;
            steps += 1;
        }
        assert!(steps > 1);
        assert_eq!(state.scroll, target);
    }

    #[test]
    fn test_jump_to_last_section_clamps() {
        let mut state = state();
        state.jump_to(Section::Contact);
        assert_eq!(state.scroll_target, state.max_scroll());
        assert_eq!(state.section, Section::Contact);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut state = state();
        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_by(10_000);
        assert_eq!(state.scroll, state.max_scroll());
    }

    #[test]
    fn test_bars_fill_only_when_visible() {
        let mut state = AppState::new(AppConfig::default(), (100, 12));
        assert!(!state.is_visible(Section::Skills));
        assert!(!state.step_bars());
        assert!(state.bar_fill.iter().all(|f| *f == 0));

        state.scroll_by(state.page.offset(Section::Skills) as i32);
        while state.step_bars() {}
        let targets: Vec<u8> = state.config.content.skills.iter().map(|s| s.pct).collect();
        assert_eq!(state.bar_fill, targets);
    }

    #[test]
    fn test_cursor_blinks() {
        let mut state = state();
        assert!(state.cursor_visible());
        state.tick_count = 10;
        assert!(!state.cursor_visible());
        state.tick_count = 20;
        assert!(state.cursor_visible());
    }

    #[test]
    fn test_cycle_project_wraps() {
        let mut state = state();
        state.cycle_project(false);
        assert_eq!(state.selected_project, Some(2));
        state.cycle_project(true);
        assert_eq!(state.selected_project, Some(0));
        assert_eq!(state.section, Section::Projects);
    }
}
