use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    /// The word list can't drive an animation. Raised synchronously by
    /// `start`; callers are expected to fall back to a known-good list.
    #[error("invalid typewriter configuration: {0}")]
    InvalidConfiguration(ConfigProblem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigProblem {
    #[error("word list is empty")]
    EmptyList,
    #[error("word at position {index} is empty")]
    EmptyWord { index: usize },
}
