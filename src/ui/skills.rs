use crate::app::state::AppState;
use crate::ui::page::render_heading;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(buf: &mut Buffer, state: &AppState, theme: &Theme) {
    let layout = &state.page.skills;
    render_heading(buf, layout.heading, "Skills", theme);

    let bars = layout.bars;
    for (i, (skill, fill)) in state
        .config
        .content
        .skills
        .iter()
        .zip(&state.bar_fill)
        .enumerate()
    {
        let y = bars.y + i as u16 * 2;
        let label = Rect::new(bars.x, y, bars.width, 1);
        Paragraph::new(Line::styled(skill.name.as_str(), theme.text())).render(label, buf);
        Paragraph::new(Line::styled(format!("{}%", fill), theme.muted()))
            .alignment(Alignment::Right)
            .render(label, buf);
        render_bar(buf, Rect::new(bars.x, y + 1, bars.width, 1), *fill, theme);
    }

    let block = theme.card_block(false);
    let inner = block.inner(layout.tooling);
    block.render(layout.tooling, buf);

    let mut lines = vec![Line::styled("Tooling", theme.title())];
    for row in &layout.tag_lines {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (i, tag) in row.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", tag), theme.chip()));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Interests", theme.title()));
    lines.extend(
        layout
            .interests
            .iter()
            .map(|l| Line::styled(l.as_str(), theme.muted())),
    );
    Paragraph::new(lines).render(inner, buf);
}

/// One row of `█` up to `fill` percent, `░` for the rest.
fn render_bar(buf: &mut Buffer, area: Rect, fill: u8, theme: &Theme) {
    let filled = filled_cells(area.width, fill);
    let span = area.width.saturating_sub(1).max(1) as f32;
    for x in 0..area.width {
        let Some(cell) = buf.cell_mut((area.x + x, area.y)) else {
            continue;
        };
        if x < filled {
            cell.set_symbol("█").set_style(theme.bar_filled(x as f32 / span));
        } else {
            cell.set_symbol("░").set_style(theme.bar_empty());
        }
    }
}

fn filled_cells(width: u16, fill: u8) -> u16 {
    (width as u32 * fill.min(100) as u32 / 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ThemeMode};

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells(50, 0), 0);
        assert_eq!(filled_cells(50, 50), 25);
        assert_eq!(filled_cells(50, 100), 50);
        assert_eq!(filled_cells(50, 250), 50);
    }

    #[test]
    fn test_bars_follow_animated_fill() {
        let mut state = AppState::new(AppConfig::default(), (100, 40));
        state.bar_fill[0] = 50;
        let mut buf = Buffer::empty(Rect::new(0, 0, state.page.width, state.page.height));
        render(&mut buf, &state, &Theme::new(ThemeMode::Dark));

        let bars = state.page.skills.bars;
        let half = filled_cells(bars.width, 50);
        let symbol = |x: u16, y: u16| buf.cell((x, y)).map(|c| c.symbol().to_string());
        assert_eq!(symbol(bars.x, bars.y + 1).as_deref(), Some("█"));
        assert_eq!(symbol(bars.x + half - 1, bars.y + 1).as_deref(), Some("█"));
        assert_eq!(symbol(bars.x + half, bars.y + 1).as_deref(), Some("░"));
        // second skill has not started filling
        assert_eq!(symbol(bars.x, bars.y + 3).as_deref(), Some("░"));
    }
}
