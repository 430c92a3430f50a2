use crate::config::ThemeMode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders};

const SLATE_900: Color = Color::Rgb(15, 23, 42);
const SLATE_800: Color = Color::Rgb(30, 41, 59);
const SLATE_700: Color = Color::Rgb(51, 65, 85);
const SLATE_400: Color = Color::Rgb(148, 163, 184);
const SLATE_100: Color = Color::Rgb(241, 245, 249);
const GRAY_50: Color = Color::Rgb(249, 250, 251);
const GRAY_200: Color = Color::Rgb(229, 231, 235);
const GRAY_500: Color = Color::Rgb(107, 114, 128);
const GRAY_900: Color = Color::Rgb(17, 24, 39);
const WHITE: Color = Color::Rgb(255, 255, 255);
const INDIGO_400: Color = Color::Rgb(129, 140, 248);
const INDIGO_600: Color = Color::Rgb(79, 70, 229);
const BLUE_400: Color = Color::Rgb(96, 165, 250);
const BLUE_600: Color = Color::Rgb(37, 99, 235);
const RED_400: Color = Color::Rgb(248, 113, 113);
const RED_600: Color = Color::Rgb(220, 38, 38);

/// Bar gradient endpoints, left to right.
const BAR_START: (u8, u8, u8) = (99, 102, 241);
const BAR_END: (u8, u8, u8) = (6, 182, 212);

/// Palette for one [`ThemeMode`].
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    fn pick(&self, dark: Color, light: Color) -> Color {
        match self.mode {
            ThemeMode::Dark => dark,
            ThemeMode::Light => light,
        }
    }

    fn text_color(&self) -> Color {
        self.pick(SLATE_100, GRAY_900)
    }

    fn accent_color(&self) -> Color {
        self.pick(INDIGO_400, INDIGO_600)
    }

    pub fn page(&self) -> Style {
        Style::default()
            .fg(self.text_color())
            .bg(self.pick(SLATE_900, GRAY_50))
    }

    pub fn card(&self) -> Style {
        Style::default()
            .fg(self.text_color())
            .bg(self.pick(SLATE_800, WHITE))
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_color())
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.pick(SLATE_400, GRAY_500))
    }

    pub fn title(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent_color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_color())
    }

    pub fn headline(&self) -> Style {
        Style::default()
            .fg(self.pick(BLUE_400, BLUE_600))
            .add_modifier(Modifier::BOLD)
    }

    pub fn link(&self) -> Style {
        self.accent().add_modifier(Modifier::UNDERLINED)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.pick(SLATE_700, GRAY_200))
    }

    pub fn border_raised(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .fg(WHITE)
            .bg(self.pick(INDIGO_600, BLUE_600))
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav(&self) -> Style {
        self.muted()
    }

    pub fn nav_active(&self) -> Style {
        Style::default()
            .fg(WHITE)
            .bg(self.pick(INDIGO_600, BLUE_600))
            .add_modifier(Modifier::BOLD)
    }

    /// Filled bar cell at `position` (0.0 left edge, 1.0 right edge).
    pub fn bar_filled(&self, position: f32) -> Style {
        Style::default().fg(lerp(BAR_START, BAR_END, position))
    }

    pub fn bar_empty(&self) -> Style {
        Style::default().fg(self.pick(SLATE_700, GRAY_200))
    }

    pub fn chip(&self) -> Style {
        Style::default()
            .fg(self.text_color())
            .bg(self.pick(SLATE_700, GRAY_200))
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(WHITE)
            .bg(INDIGO_600)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text(&self) -> Style {
        self.text()
    }

    pub fn placeholder(&self) -> Style {
        self.muted().add_modifier(Modifier::ITALIC)
    }

    pub fn cursor(&self) -> Style {
        self.text().add_modifier(Modifier::REVERSED)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.pick(RED_400, RED_600))
    }

    pub fn status_bar(&self) -> Style {
        Style::default()
            .fg(self.pick(SLATE_100, WHITE))
            .bg(self.pick(SLATE_700, GRAY_500))
    }

    /// Bordered card with one column of horizontal padding. A raised card
    /// gets a thick accent border.
    pub fn card_block(&self, raised: bool) -> Block<'static> {
        let (border_type, border_style) = if raised {
            (BorderType::Thick, self.border_raised())
        } else {
            (BorderType::Rounded, self.border())
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .style(self.card())
    }

    /// Input field frame; focused fields use the accent color.
    pub fn field_block(&self, focused: bool) -> Block<'static> {
        let border_style = if focused { self.accent() } else { self.border() };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
    }
}

fn lerp(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}
