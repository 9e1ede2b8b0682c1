//! Letter hints for the on-screen keyboard

use crate::core::{Feedback, Pattern, Word};

/// Best feedback seen so far for each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterHints {
    hints: [Option<Feedback>; 26],
}

impl LetterHints {
    /// Hint for a letter, case-insensitive. Non-letters have no hint.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Feedback> {
        letter_index(letter).and_then(|i| self.hints[i])
    }

    /// Fold a scored guess into the hints
    ///
    /// A letter only ever moves up: absent -> present -> correct.
    pub(crate) fn absorb(&mut self, guess: &Word, pattern: Pattern) {
        for (&byte, &feedback) in guess.chars().iter().zip(pattern.feedback()) {
            if let Some(i) = letter_index(byte as char) {
                let slot = &mut self.hints[i];
                *slot = Some(slot.map_or(feedback, |seen| seen.max(feedback)));
            }
        }
    }
}

fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| (letter.to_ascii_uppercase() as u8 - b'A') as usize)
}
