//! The typewriter state machine, without a clock.
//!
//! [`Typewriter::tick`] advances exactly one step. [`Typewriter::next_delay`]
//! says how long the caller should wait before the next tick; the async
//! driver in [`super::driver`] is the only caller that owns a timer.

use super::error::{ConfigProblem, TypewriterError};
use std::time::Duration;

pub const DEFAULT_TYPE_MS: u64 = 80;
pub const DEFAULT_HOLD_MS: u64 = 800;
pub const DEFAULT_DELETE_MS: u64 = 50;

pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(DEFAULT_TYPE_MS);
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(DEFAULT_HOLD_MS);
pub const DEFAULT_DELETE_DELAY: Duration = Duration::from_millis(DEFAULT_DELETE_MS);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Typing,
    Holding,
    Deleting,
}

/// Delays between ticks for each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub type_delay: Duration,
    pub hold_delay: Duration,
    pub delete_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            type_delay: DEFAULT_TYPE_DELAY,
            hold_delay: DEFAULT_HOLD_DELAY,
            delete_delay: DEFAULT_DELETE_DELAY,
        }
    }
}

impl Timings {
    pub fn from_millis(type_ms: u64, hold_ms: u64, delete_ms: u64) -> Self {
        Self {
            type_delay: Duration::from_millis(type_ms),
            hold_delay: Duration::from_millis(hold_ms),
            delete_delay: Duration::from_millis(delete_ms),
        }
    }

    /// Time for one word of `len` characters to be typed, held and deleted.
    pub fn cycle(&self, len: usize) -> Duration {
        let len = len as u32;
        self.type_delay * len + self.hold_delay + self.delete_delay * len
    }
}

/// A non-empty list of non-empty words. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(TypewriterError::InvalidConfiguration(ConfigProblem::EmptyList));
        }
        if let Some(index) = words.iter().position(|w| w.is_empty()) {
            return Err(TypewriterError::InvalidConfiguration(
                ConfigProblem::EmptyWord { index },
            ));
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.words[index % self.words.len()]
    }
}

/// What a viewer sees after each step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub word_index: usize,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: WordList,
    timings: Timings,
    word_index: usize,
    phase: Phase,
    /// Counted in chars, never bytes.
    visible_len: usize,
}

impl Typewriter {
    pub fn new(words: WordList, timings: Timings) -> Self {
        Self {
            words,
            timings,
            word_index: 0,
            phase: Phase::Typing,
            visible_len: 0,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    pub fn current_word(&self) -> &str {
        self.words.get(self.word_index)
    }

    fn current_len(&self) -> usize {
        self.current_word().chars().count()
    }

    /// The first `visible_len` characters of the current word.
    pub fn displayed(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.visible_len) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.displayed().to_string(),
            word_index: self.word_index,
            phase: self.phase,
        }
    }

    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timings.type_delay,
            Phase::Holding => self.timings.hold_delay,
            Phase::Deleting => self.timings.delete_delay,
        }
    }

    pub fn tick(&mut self) {
        match self.phase {
            Phase::Typing => {
                let len = self.current_len();
                self.visible_len = (self.visible_len + 1).min(len);
                if self.visible_len == len {
                    self.phase = Phase::Holding;
                }
            }
            // The full word stays visible until the first delete tick.
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.visible_len = self.visible_len.saturating_sub(1);
                if self.visible_len == 0 {
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}
