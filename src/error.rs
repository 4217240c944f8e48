use thiserror::Error;

/// Errors that stop a generation before any grid is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("no directions selected: enable at least one direction")]
    NoDirectionsSelected,

    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
}

/// Rejections raised while checking a puzzle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("grid size {size} is outside the allowed range {min}..={max}")]
    GridSizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("expected between {min} and {max} words, got {count}")]
    WordCount { count: usize, min: usize, max: usize },

    #[error("word is empty")]
    EmptyWord,

    #[error("word '{word}' must have at least {min} letters")]
    WordTooShort { word: String, min: usize },

    #[error("word '{word}' cannot have more than {max} letters")]
    WordTooLong { word: String, max: usize },

    #[error("word '{0}' must contain only letters A-Z (no accents or digits)")]
    InvalidCharacters(String),

    #[error("word '{0}' was already added")]
    DuplicateWord(String),
}
