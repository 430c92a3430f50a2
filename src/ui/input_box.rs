use crate::app::state::{FormField, InputState};
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One bordered form field. The page is drawn off-screen, so the cursor is a
/// reversed cell rather than the terminal cursor.
pub fn render(
    buf: &mut Buffer,
    area: Rect,
    input: &InputState,
    field: FormField,
    focused: bool,
    cursor_on: bool,
    theme: &Theme,
) {
    let block = theme.field_block(focused);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.is_empty() {
        return;
    }

    if input.text.is_empty() && !focused {
        Paragraph::new(Line::styled(field.placeholder(), theme.placeholder())).render(inner, buf);
        return;
    }

    let (visible, cursor_x) = visible_window(input, inner.width);
    Paragraph::new(Line::styled(visible, theme.input_text())).render(inner, buf);

    if focused && cursor_on {
        if let Some(cell) = buf.cell_mut((inner.x + cursor_x, inner.y)) {
            let style = cell.style().patch(theme.cursor());
            cell.set_style(style);
        }
    }
}

/// The tail of the text that keeps the cursor inside `width` columns, and
/// the cursor column within it.
fn visible_window(input: &InputState, width: u16) -> (&str, u16) {
    let width = width.max(1) as usize;
    let before = input.before_cursor();
    let mut start = 0;
    let mut cursor_x = before.width();
    for (i, c) in before.char_indices() {
        if cursor_x < width {
            break;
        }
        cursor_x -= c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }
    (&input.text[start..], cursor_x as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;

    fn input(text: &str) -> InputState {
        let mut input = InputState::default();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_window_fits_short_text() {
        let input = input("abc");
        assert_eq!(visible_window(&input, 10), ("abc", 3));
    }

    #[test]
    fn test_window_scrolls_to_cursor() {
        let mut input = input("abcdef");
        assert_eq!(visible_window(&input, 4), ("def", 3));
        input.move_home();
        assert_eq!(visible_window(&input, 4), ("abcdef", 0));
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let theme = Theme::new(ThemeMode::Dark);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        render(
            &mut buf,
            Rect::new(0, 0, 20, 3),
            &InputState::default(),
            FormField::Email,
            false,
            true,
            &theme,
        );
        let row: String = (2..7)
            .filter_map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(row, "Email");
    }
}
