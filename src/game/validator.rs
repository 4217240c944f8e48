use crate::{error::ValidationError, utils::letters::is_puzzle_word};
use std::collections::HashSet;

/// Shortest word a puzzle accepts
pub const MIN_WORD_LEN: usize = 3;

/// Checks words before they reach the generator: trimmed, uppercased,
/// letters A-Z only, `MIN_WORD_LEN..=grid_size` long, no repeats.
pub struct WordValidator {
    grid_size: usize,
}

impl WordValidator {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    /// Normalize a single word, rejecting it if it can never be hidden
    pub fn normalize(&self, raw: &str) -> Result<String, ValidationError> {
        let word = raw.trim().to_uppercase();

        if word.is_empty() {
            return Err(ValidationError::EmptyWord);
        }

        let len = word.chars().count();
        if len < MIN_WORD_LEN {
            return Err(ValidationError::WordTooShort {
                word,
                min: MIN_WORD_LEN,
            });
        }
        if len > self.grid_size {
            return Err(ValidationError::WordTooLong {
                word,
                max: self.grid_size,
            });
        }
        if !is_puzzle_word(&word) {
            return Err(ValidationError::InvalidCharacters(word));
        }

        Ok(word)
    }

    /// Normalize every word, stopping at the first rejection
    pub fn validate_list<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> Result<Vec<String>, ValidationError> {
        let mut seen = HashSet::with_capacity(words.len());
        let mut normalized = Vec::with_capacity(words.len());

        for raw in words {
            let word = self.normalize(raw.as_ref())?;
            if !seen.insert(word.clone()) {
                return Err(ValidationError::DuplicateWord(word));
            }
            normalized.push(word);
        }

        Ok(normalized)
    }
}
