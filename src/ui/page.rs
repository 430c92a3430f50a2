//! The scrolling page.
//!
//! Every section is laid out top to bottom in one virtual page whose width
//! is the terminal width minus margins. [`PageLayout`] owns all geometry and
//! text wrapping so that scroll targets, hit testing and drawing agree on
//! where things are. [`render_page`] draws the whole page into an off-screen
//! buffer and [`blit`] copies the visible rows into the frame.

use crate::app::state::{AppState, FormField, Section};
use crate::config::AppConfig;
use crate::ui::theme::Theme;
use crate::ui::{contact, education, hero, projects, skills};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use std::mem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SECTION_GAP: u16 = 2;
const COLUMN_GAP: u16 = 2;
const ROW_GAP: u16 = 1;
/// Border plus one column of padding on each side of a card.
pub const CARD_INSET: u16 = 4;
pub const FIELD_HEIGHT: u16 = 3;
const HIGHLIGHT_HEIGHT: u16 = 5;
const INFO_HEIGHT: u16 = 10;
const FORM_HEIGHT: u16 = 14;

pub struct AboutLayout {
    pub area: Rect,
    pub hero: Rect,
    pub summary: Vec<String>,
    pub highlights: Vec<Rect>,
}

pub struct SkillsLayout {
    pub area: Rect,
    pub heading: Rect,
    pub bars: Rect,
    pub tooling: Rect,
    pub tag_lines: Vec<Vec<String>>,
    pub interests: Vec<String>,
}

pub struct ProjectsLayout {
    pub area: Rect,
    pub heading: Rect,
    pub cards: Vec<Rect>,
    pub descs: Vec<Vec<String>>,
}

pub struct EducationLayout {
    pub area: Rect,
    pub heading: Rect,
    pub cards: Vec<Rect>,
    pub subtitles: Vec<Vec<String>>,
    pub details: Vec<Vec<String>>,
}

pub struct ContactLayout {
    pub area: Rect,
    pub heading: Rect,
    pub info: Rect,
    pub form: Rect,
    pub fields: [Rect; 3],
    pub button: Rect,
}

pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub about: AboutLayout,
    pub skills: SkillsLayout,
    pub projects: ProjectsLayout,
    pub education: EducationLayout,
    pub contact: ContactLayout,
    pub footer: Rect,
}

impl PageLayout {
    pub fn compute(config: &AppConfig, width: u16) -> Self {
        let content = &config.content;
        let width = width.max(1);
        let inner = width.saturating_sub(CARD_INSET);
        let mut y = 0;

        // About: hero card, then the quick-fact cards
        let summary = wrap(&config.profile.summary, inner);
        let hero_height = 2 + 7 + summary.len() as u16;
        let hero = Rect::new(0, y, width, hero_height);
        y += hero_height + ROW_GAP;
        let (cols, col_width) = columns(width, if width >= 60 { 2 } else { 1 }, content.highlights.len());
        let (highlights, bottom) = grid(
            y,
            cols,
            col_width,
            &vec![HIGHLIGHT_HEIGHT; content.highlights.len()],
        );
        y = bottom;
        let about = AboutLayout {
            area: Rect::new(0, 0, width, y),
            hero,
            summary,
            highlights,
        };
        y += SECTION_GAP;

        // Skills: one label row and one bar row per skill, then tooling
        let top = y;
        let heading = Rect::new(0, y, width, 1);
        y += 2;
        let bars_height = content.skills.len() as u16 * 2;
        let bars = Rect::new(0, y, width, bars_height);
        y += bars_height;
        if bars_height > 0 {
            y += ROW_GAP;
        }
        let tag_lines = pack_tags(&content.tooling, inner);
        let interests = wrap(&content.interests, inner);
        let tooling_height = 2 + 1 + tag_lines.len() as u16 + 1 + 1 + interests.len() as u16;
        let tooling = Rect::new(0, y, width, tooling_height);
        y += tooling_height;
        let skills = SkillsLayout {
            area: Rect::new(0, top, width, y - top),
            heading,
            bars,
            tooling,
            tag_lines,
            interests,
        };
        y += SECTION_GAP;

        // Projects
        let top = y;
        let heading = Rect::new(0, y, width, 1);
        y += 2;
        let wanted = match width {
            w if w >= 96 => 3,
            w if w >= 64 => 2,
            _ => 1,
        };
        let (cols, col_width) = columns(width, wanted, content.projects.len());
        let card_inner = col_width.saturating_sub(CARD_INSET);
        let descs: Vec<Vec<String>> = content
            .projects
            .iter()
            .map(|p| wrap(&p.desc, card_inner))
            .collect();
        let heights: Vec<u16> = descs.iter().map(|d| 6 + d.len() as u16).collect();
        let (cards, bottom) = grid(y, cols, col_width, &heights);
        y = bottom;
        let projects = ProjectsLayout {
            area: Rect::new(0, top, width, y - top),
            heading,
            cards,
            descs,
        };
        y += SECTION_GAP;

        // Education & experience
        let top = y;
        let heading = Rect::new(0, y, width, 1);
        y += 2;
        let (cols, col_width) = columns(width, if width >= 80 { 2 } else { 1 }, content.education.len());
        let card_inner = col_width.saturating_sub(CARD_INSET);
        let subtitles: Vec<Vec<String>> = content
            .education
            .iter()
            .map(|c| wrap(&c.title, card_inner))
            .collect();
        let details: Vec<Vec<String>> = content
            .education
            .iter()
            .map(|c| wrap(&c.detail, card_inner))
            .collect();
        let heights: Vec<u16> = subtitles
            .iter()
            .zip(&details)
            .map(|(s, d)| 2 + 1 + s.len() as u16 + 1 + d.len() as u16)
            .collect();
        let (cards, bottom) = grid(y, cols, col_width, &heights);
        y = bottom;
        let education = EducationLayout {
            area: Rect::new(0, top, width, y - top),
            heading,
            cards,
            subtitles,
            details,
        };
        y += SECTION_GAP;

        // Contact: info card and form card
        let top = y;
        let heading = Rect::new(0, y, width, 1);
        y += 2;
        let (cols, col_width) = columns(width, if width >= 80 { 2 } else { 1 }, 2);
        let (cards, bottom) = grid(y, cols, col_width, &[INFO_HEIGHT, FORM_HEIGHT]);
        y = bottom;
        let info = cards[0];
        let form = cards[1];
        let field_x = form.x + 2;
        let field_width = form.width.saturating_sub(CARD_INSET);
        // border, "Get in touch", blank line
        let fields_top = form.y + 3;
        let fields = [0u16, 1, 2].map(|i| {
            Rect::new(field_x, fields_top + i * FIELD_HEIGHT, field_width, FIELD_HEIGHT)
        });
        let button = Rect::new(field_x, fields_top + 3 * FIELD_HEIGHT, field_width, 1);
        let contact = ContactLayout {
            area: Rect::new(0, top, width, y - top),
            heading,
            info,
            form,
            fields,
            button,
        };

        y += 1;
        let footer = Rect::new(0, y, width, 1);

        Self {
            width,
            height: y + 2,
            about,
            skills,
            projects,
            education,
            contact,
            footer,
        }
    }

    pub fn area(&self, section: Section) -> Rect {
        match section {
            Section::About => self.about.area,
            Section::Skills => self.skills.area,
            Section::Projects => self.projects.area,
            Section::Education => self.education.area,
            Section::Contact => self.contact.area,
        }
    }

    pub fn offset(&self, section: Section) -> u16 {
        self.area(section).y
    }

    /// The last section starting at or above page row `y`.
    pub fn section_at(&self, y: u16) -> Section {
        Section::ALL
            .iter()
            .rev()
            .find(|s| self.offset(**s) <= y)
            .copied()
            .unwrap_or(Section::About)
    }

    pub fn project_at(&self, x: u16, y: u16) -> Option<usize> {
        let pos = Position::new(x, y);
        self.projects.cards.iter().position(|r| r.contains(pos))
    }

    pub fn field_at(&self, x: u16, y: u16) -> Option<FormField> {
        let pos = Position::new(x, y);
        self.contact
            .fields
            .iter()
            .position(|r| r.contains(pos))
            .map(|i| FormField::ALL[i])
    }
}

/// Column count (capped by `count`) and the width of each column.
fn columns(width: u16, wanted: u16, count: usize) -> (u16, u16) {
    let cols = wanted.clamp(1, count.max(1) as u16);
    let col_width = (width.saturating_sub(COLUMN_GAP * (cols - 1)) / cols).max(1);
    (cols, col_width)
}

/// Place cards row by row; cards in a row share the tallest height.
/// Returns the rects and the row just below the last card.
fn grid(top: u16, cols: u16, col_width: u16, heights: &[u16]) -> (Vec<Rect>, u16) {
    if heights.is_empty() {
        return (Vec::new(), top);
    }
    let mut rects = Vec::with_capacity(heights.len());
    let mut y = top;
    for row in heights.chunks(cols as usize) {
        let row_height = row.iter().copied().max().unwrap_or(0);
        for i in 0..row.len() as u16 {
            rects.push(Rect::new(i * (col_width + COLUMN_GAP), y, col_width, row_height));
        }
        y += row_height + ROW_GAP;
    }
    (rects, y - ROW_GAP)
}

/// Greedy word wrap by display width. Words wider than the line are split.
/// Always returns at least one line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if word_width > width {
            if !line.is_empty() {
                lines.push(mem::take(&mut line));
            }
            line_width = 0;
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if line_width + w > width && !line.is_empty() {
                    lines.push(mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
            continue;
        }

        let needed = if line.is_empty() {
            word_width
        } else {
            line_width + 1 + word_width
        };
        if needed > width {
            lines.push(mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        } else {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_width = needed;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pack tags into rows; each tag is drawn as ` tag ` with one space between.
pub fn pack_tags(tags: &[String], width: u16) -> Vec<Vec<String>> {
    let width = width.max(1) as usize;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut row_width = 0;
    for tag in tags {
        let chip = tag.width() + 2;
        let needed = if row.is_empty() { chip } else { row_width + 1 + chip };
        if needed > width && !row.is_empty() {
            rows.push(mem::take(&mut row));
            row_width = chip;
        } else {
            row_width = needed;
        }
        row.push(tag.clone());
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

pub fn render_page(state: &AppState, theme: &Theme) -> Buffer {
    let page = &state.page;
    let area = Rect::new(0, 0, page.width, page.height.max(1));
    let mut buf = Buffer::empty(area);
    Block::default().style(theme.page()).render(area, &mut buf);

    hero::render(&mut buf, state, theme);
    skills::render(&mut buf, state, theme);
    projects::render(&mut buf, state, theme);
    education::render(&mut buf, state, theme);
    contact::render(&mut buf, state, theme);

    let footer = format!(
        "© {} {} — Built with Rust & ratatui",
        state.year, state.config.profile.name
    );
    let pad = (page.width as usize).saturating_sub(footer.width()) / 2;
    Paragraph::new(Line::styled(format!("{}{}", " ".repeat(pad), footer), theme.muted()))
        .render(page.footer, &mut buf);

    buf
}

/// Section title with an accent rule running to the right edge.
pub fn render_heading(buf: &mut Buffer, area: Rect, title: &str, theme: &Theme) {
    let rule = (area.width as usize).saturating_sub(title.width() + 1);
    Paragraph::new(Line::from(vec![
        Span::styled(title.to_string(), theme.heading()),
        Span::raw(" "),
        Span::styled("─".repeat(rule), theme.border()),
    ]))
    .render(area, buf);
}

/// Copy page rows `scroll..` into `dest` of the frame buffer.
pub fn blit(page: &Buffer, scroll: u16, dest: Rect, frame_buf: &mut Buffer) {
    let width = dest.width.min(page.area.width);
    for row in 0..dest.height {
        let py = scroll.saturating_add(row);
        if py >= page.area.height {
            break;
        }
        for col in 0..width {
            if let (Some(src), Some(dst)) = (
                page.cell((col, py)),
                frame_buf.cell_mut((dest.x + col, dest.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("the quick brown fox", 9), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("a  b", 10), vec!["a b"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        assert_eq!(wrap("日本語 テキスト", 6), vec!["日本語", "テキス", "ト"]);
    }

    #[test]
    fn test_pack_tags() {
        let tags: Vec<String> = ["Git", "VS Code", "Docker"].iter().map(|s| s.to_string()).collect();
        // " Git " + " " + " VS Code " = 15
        assert_eq!(
            pack_tags(&tags, 15),
            vec![vec!["Git".to_string(), "VS Code".to_string()], vec!["Docker".to_string()]]
        );
        assert!(pack_tags(&[], 10).is_empty());
    }

    #[test]
    fn test_sections_are_ordered_and_disjoint() {
        for width in [30, 70, 120] {
            let page = PageLayout::compute(&AppConfig::default(), width);
            let areas: Vec<Rect> = Section::ALL.iter().map(|s| page.area(*s)).collect();
            assert_eq!(areas[0].y, 0);
            for pair in areas.windows(2) {
                assert!(pair[0].bottom() <= pair[1].y, "width {}", width);
            }
            assert!(page.footer.y >= areas[4].bottom());
            assert!(page.height > page.footer.y);
        }
    }

    #[test]
    fn test_section_at() {
        let page = PageLayout::compute(&AppConfig::default(), 100);
        assert_eq!(page.section_at(0), Section::About);
        assert_eq!(page.section_at(page.offset(Section::Projects)), Section::Projects);
        assert_eq!(page.section_at(page.offset(Section::Projects) + 1), Section::Projects);
        assert_eq!(page.section_at(page.offset(Section::Projects) - 1), Section::Skills);
    }

    #[test]
    fn test_project_columns_follow_width() {
        let wide = PageLayout::compute(&AppConfig::default(), 120);
        let rows: Vec<u16> = wide.projects.cards.iter().map(|r| r.y).collect();
        assert!(rows.iter().all(|y| *y == rows[0]));

        let narrow = PageLayout::compute(&AppConfig::default(), 40);
        let cards = &narrow.projects.cards;
        assert!(cards[0].bottom() < cards[1].y);
    }

    #[test]
    fn test_hit_testing() {
        let page = PageLayout::compute(&AppConfig::default(), 100);
        let card = page.projects.cards[1];
        assert_eq!(page.project_at(card.x + 1, card.y + 1), Some(1));
        assert_eq!(page.project_at(card.x + 1, page.projects.heading.y), None);

        let field = page.contact.fields[2];
        assert_eq!(page.field_at(field.x, field.y), Some(FormField::Message));
        assert!(page.contact.button.y < page.contact.form.bottom());
    }

    #[test]
    fn test_blit_copies_visible_rows() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 6));
        page.set_string(0, 3, "row3", ratatui::style::Style::default());
        let mut frame = Buffer::empty(Rect::new(0, 0, 10, 4));
        blit(&page, 3, Rect::new(2, 1, 8, 3), &mut frame);
        let copied: String = (2..6)
            .filter_map(|x| frame.cell((x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(copied, "row3");
    }
}
