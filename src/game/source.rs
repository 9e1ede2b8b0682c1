//! Word source seam
//!
//! The session never knows where words come from. It draws secrets and checks
//! guesses through [`WordSource`], which may only become available after an
//! asynchronous load.

use crate::core::Word;
use std::fmt;

/// Supplies secret words and answers word-list membership
pub trait WordSource {
    /// Draw a secret word for a new round
    ///
    /// # Errors
    /// Returns `SourceError` if no word can be provided.
    fn draw_secret(&mut self) -> Result<Word, SourceError>;

    /// Whether `word` is an accepted guess (case-insensitive)
    fn is_valid(&self, word: &str) -> bool;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn draw_secret(&mut self) -> Result<Word, SourceError> {
        (**self).draw_secret()
    }

    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }
}

/// The word source could not provide data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// There are no words to draw a secret from
    EmptyCorpus,
    /// Reading a word list failed
    Io { path: String, message: String },
    /// The background loader exited without a result
    LoaderStopped,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Word list contains no playable words"),
            Self::Io { path, message } => {
                write!(f, "Failed to read word list '{path}': {message}")
            }
            Self::LoaderStopped => write!(f, "Word list loader stopped unexpectedly"),
        }
    }
}

impl std::error::Error for SourceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_messages() {
        assert_eq!(
            SourceError::EmptyCorpus.to_string(),
            "Word list contains no playable words"
        );

        let err = SourceError::Io {
            path: "words.txt".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to read word list 'words.txt': not found");
        assert_eq!(
            SourceError::LoaderStopped.to_string(),
            "Word list loader stopped unexpectedly"
        );
    }
}
