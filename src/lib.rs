//! folio: a personal portfolio page in the terminal, with a headline that a
//! typewriter keeps typing and deleting.

pub mod app;
pub mod config;
pub mod logging;
pub mod typewriter;
pub mod ui;
