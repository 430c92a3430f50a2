//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default, and the defaults are the portfolio itself, so
//! the binary shows a complete page with no config file at all.

use crate::typewriter::{Timings, DEFAULT_DELETE_MS, DEFAULT_HOLD_MS, DEFAULT_TYPE_MS};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub headline: HeadlineConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Who the portfolio is about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Highlighted after the name in the hero heading.
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_linkedin")]
    pub linkedin: String,
    #[serde(default = "default_github")]
    pub github: String,
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            role: default_role(),
            summary: default_summary(),
            email: default_email(),
            linkedin: default_linkedin(),
            github: default_github(),
            location: default_location(),
        }
    }
}

impl ProfileConfig {
    /// Up to two uppercase initials, e.g. `"AS"`.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Typewriter headline words and timing, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_words")]
    pub words: Vec<String>,
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
}

impl Default for HeadlineConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            words: default_words(),
            type_ms: default_type_ms(),
            hold_ms: default_hold_ms(),
            delete_ms: default_delete_ms(),
        }
    }
}

impl HeadlineConfig {
    /// Zero delays are bumped to 1ms so a typo can't spin the timer.
    pub fn timings(&self) -> Timings {
        Timings::from_millis(self.type_ms.max(1), self.hold_ms.max(1), self.delete_ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0-100.
    pub pct: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: String,
    pub desc: String,
}

/// A labelled card: quick facts in the hero and the education/experience
/// entries share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub label: String,
    pub title: String,
    pub detail: String,
}

/// Everything shown below the header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_highlights")]
    pub highlights: Vec<Card>,
    #[serde(default = "default_skills")]
    pub skills: Vec<Skill>,
    #[serde(default = "default_tooling")]
    pub tooling: Vec<String>,
    #[serde(default = "default_interests")]
    pub interests: String,
    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,
    #[serde(default = "default_education")]
    pub education: Vec<Card>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            highlights: default_highlights(),
            skills: default_skills(),
            tooling: default_tooling(),
            interests: default_interests(),
            projects: default_projects(),
            education: default_education(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// UI appearance and refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    /// Redraw tick, which also paces scrolling and skill bars.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Percentage points a skill bar fills per tick.
    #[serde(default = "default_bar_step")]
    pub bar_step: u8,
    /// Rows the page scrolls per tick when jumping to a section.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            tick_ms: default_tick_ms(),
            bar_step: default_bar_step(),
            scroll_step: default_scroll_step(),
        }
    }
}

/// Diagnostic log file settings. The terminal belongs to the UI, so logs
/// only ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_name() -> String {
    "Abhishek Sharma".to_string()
}
fn default_tagline() -> String {
    "B.Tech CSE • Aspiring Software & Data Engineer".to_string()
}
fn default_role() -> String {
    "Developer".to_string()
}
fn default_summary() -> String {
    "Detail-oriented Computer Science student focused on building full-stack web apps, \
     cloud solutions and data-driven projects. I build clean UI and scalable backends."
        .to_string()
}
fn default_email() -> String {
    "nabban6399@gmail.com".to_string()
}
fn default_linkedin() -> String {
    "linkedin.com/in/abhishek-sharma-99789b286".to_string()
}
fn default_github() -> String {
    "github.com".to_string()
}
fn default_location() -> String {
    "Noida, Uttar Pradesh, India".to_string()
}
fn default_prefix() -> String {
    "Working on:".to_string()
}
pub(crate) fn default_words() -> Vec<String> {
    ["Software", "Data", "Cloud", "AI"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_type_ms() -> u64 {
    DEFAULT_TYPE_MS
}
fn default_hold_ms() -> u64 {
    DEFAULT_HOLD_MS
}
fn default_delete_ms() -> u64 {
    DEFAULT_DELETE_MS
}
fn default_tick_ms() -> u64 {
    50
}
fn default_bar_step() -> u8 {
    4
}
fn default_scroll_step() -> u16 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/folio/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

fn card(label: &str, title: &str, detail: &str) -> Card {
    Card {
        label: label.to_string(),
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

fn default_highlights() -> Vec<Card> {
    vec![
        card(
            "Education",
            "B.Tech — CSE (2022 - 2026)",
            "Noida Institute of Engineering & Technology",
        ),
        card(
            "Certs",
            "Google Cloud • AWS Academy • CCNA",
            "GCP & Cloud fundamentals",
        ),
        card("Projects", "Tour & Travel Booking", "PHP + MySQL + Auth"),
        card(
            "Volunteer",
            "Cloud Bootcamp Organizer",
            "Led team for 150+ students",
        ),
    ]
}

fn default_skills() -> Vec<Skill> {
    [
        ("Java", 85),
        ("Python", 80),
        ("JavaScript", 78),
        ("React", 75),
        ("Node.js", 70),
        ("SQL / MySQL", 72),
        ("MongoDB", 65),
        ("AWS (EC2/S3)", 60),
    ]
    .into_iter()
    .map(|(name, pct)| Skill {
        name: name.to_string(),
        pct,
    })
    .collect()
}

fn default_tooling() -> Vec<String> {
    ["Git", "VS Code", "Postman", "Docker (basics)", "Power BI", "Tableau"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_interests() -> String {
    "Full-stack web, Cloud infra, ML & Data Visualization".to_string()
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Tour & Travel Website".into(),
            tech: "HTML, CSS, JS, PHP, MySQL".into(),
            desc: "Dynamic booking system with admin panel and user auth.".into(),
        },
        Project {
            title: "Serverless Site (Firebase)".into(),
            tech: "HTML, JS, Firebase Hosting, Firestore".into(),
            desc: "Responsive static site with dynamic form submissions (Firestore).".into(),
        },
        Project {
            title: "Netflix Clone (Demo)".into(),
            tech: "React, Firebase".into(),
            desc: "Frontend clone showcasing UI & auth flows (demo project).".into(),
        },
    ]
}

fn default_education() -> Vec<Card> {
    vec![
        card(
            "Noida Institute of Engineering & Technology",
            "B.Tech — Computer Science Engineering (2022 – 2026 expected)",
            "Relevant: Data Structures, DBMS, ML basics, Cloud fundamentals",
        ),
        card(
            "Intern – Oasis Info",
            "Worked on software development tasks and contributed to real projects.",
            "Responsibilities: feature development, testing, documentation",
        ),
    ]
}
