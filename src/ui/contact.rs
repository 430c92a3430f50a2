use crate::app::state::{AppState, FormField};
use crate::ui::input_box;
use crate::ui::page::render_heading;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SEND_LABEL: &str = " Send message ";

pub fn render(buf: &mut Buffer, state: &AppState, theme: &Theme) {
    let layout = &state.page.contact;
    let profile = &state.config.profile;
    render_heading(buf, layout.heading, "Contact", theme);

    let block = theme.card_block(false);
    let inner = block.inner(layout.info);
    block.render(layout.info, buf);
    let mut lines = Vec::new();
    for (label, value) in [
        ("Email", &profile.email),
        ("LinkedIn", &profile.linkedin),
        ("Location", &profile.location),
    ] {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled(label, theme.muted()));
        lines.push(Line::styled(value.as_str(), theme.link()));
    }
    Paragraph::new(lines).render(inner, buf);

    let form = &state.form;
    let block = theme.card_block(form.active.is_some());
    let inner = block.inner(layout.form);
    block.render(layout.form, buf);
    let status = match &form.error {
        Some(err) => Line::styled(err.to_string(), theme.error()),
        None => Line::default(),
    };
    Paragraph::new(vec![Line::styled("Get in touch", theme.title()), status]).render(inner, buf);

    for (rect, field) in layout.fields.iter().zip(FormField::ALL) {
        input_box::render(
            buf,
            *rect,
            form.field(field),
            field,
            form.active == Some(field),
            state.cursor_visible(),
            theme,
        );
    }

    let hint = if form.active == Some(FormField::Message) {
        "Enter to send"
    } else {
        "Enter to write"
    };
    Paragraph::new(Line::from(vec![
        Span::styled(SEND_LABEL, theme.button()),
        Span::raw("  "),
        Span::styled(hint, theme.muted()),
    ]))
    .render(layout.button, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FormError;
    use crate::config::{AppConfig, ThemeMode};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_form_shows_error_and_typed_text() {
        let mut state = AppState::new(AppConfig::default(), (100, 40));
        for c in "Ada".chars() {
            state.form.name.insert_char(c);
        }
        state.form.error = Some(FormError::Missing(FormField::Email));
        let mut buf = Buffer::empty(Rect::new(0, 0, state.page.width, state.page.height));
        render(&mut buf, &state, &Theme::new(ThemeMode::Dark));

        let layout = &state.page.contact;
        assert!(row_text(&buf, layout.form.y + 2).contains("Please fill in your email"));
        assert!(row_text(&buf, layout.fields[0].y + 1).contains("Ada"));
        assert!(row_text(&buf, layout.fields[1].y + 1).contains("Email"));
        assert!(row_text(&buf, layout.button.y).contains("Send message"));
        assert!(row_text(&buf, layout.info.y + 2).contains("nabban6399@gmail.com"));
    }
}
