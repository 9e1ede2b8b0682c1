//! Core domain types for the game
//!
//! Words and scoring. Everything here is pure and has no knowledge of
//! sessions, boards or presentation.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LEN: usize = 5;

/// Guesses allowed per round
pub const MAX_ROWS: usize = 6;
