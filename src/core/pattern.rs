//! Guess scoring and feedback patterns
//!
//! A [`Pattern`] holds one [`Feedback`] per letter of a guess. It is computed
//! once per submitted row and never changes afterwards.

use super::{WORD_LEN, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Letter does not occur in the secret (or every occurrence is already accounted for)
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter is at the same position in the secret
    Correct,
}

impl Feedback {
    /// Emoji square used by share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a complete guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LEN]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LEN]);

    /// Wrap an explicit feedback sequence
    #[inline]
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LEN]) -> Self {
        Self(feedback)
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicate letters are handled in two passes:
    /// 1. Exact position matches are marked correct and removed from the pool
    ///    of the secret's letters.
    /// 2. Remaining positions, left to right, are present while an unconsumed
    ///    occurrence is left in the pool, absent otherwise.
    ///
    /// A letter is therefore never marked correct or present more times than
    /// it occurs in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback::*, Pattern, Word};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// // The only E in CRANE is taken by the exact match at the end
    /// assert_eq!(pattern.feedback(), &[Absent, Absent, Present, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *slot = Feedback::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, leftmost occurrences consume first
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
