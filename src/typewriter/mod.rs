//! Typewriter headline: reveals each word character by character, holds it,
//! deletes it, and moves on to the next word, forever.

pub mod driver;
pub mod error;
pub mod machine;

pub use driver::{start, Handle, Headline};
pub use error::{ConfigProblem, TypewriterError};
pub use machine::{
    Phase, Snapshot, Timings, Typewriter, WordList, DEFAULT_DELETE_MS, DEFAULT_HOLD_MS,
    DEFAULT_TYPE_MS,
};
