//! One round of play as an immutable value
//!
//! Every input produces either a brand new `Round` or nothing at all. The
//! session swaps the new value in wholesale, so a half-applied input can never
//! be observed.

use super::board::{Board, Cursor, FeedbackGrid};
use super::keyboard::LetterHints;
use crate::core::{Pattern, Word};
use log::{debug, info, trace};
use std::fmt;

/// Progress of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No round exists: the word source is loading or unavailable
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// Whether the round has ended
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// User-facing message attached to the latest state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The submitted row is not in the word list; the row is kept for editing
    InvalidWord(String),
    /// The secret was guessed on row `guesses`
    Won { guesses: usize },
    /// All rows used; reveals the secret
    Lost { secret: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => write!(f, "Not in word list: {word}"),
            Self::Won { guesses } => {
                let label = match guesses {
                    1 => "Genius!",
                    2 => "Magnificent!",
                    3 => "Impressive!",
                    4 => "Splendid!",
                    5 => "Great!",
                    _ => "Phew!",
                };
                let unit = if *guesses == 1 { "guess" } else { "guesses" };
                write!(f, "You win! {label} Solved in {guesses} {unit}")
            }
            Self::Lost { secret } => write!(f, "Game over! The word was {secret}"),
        }
    }
}

/// A gameplay input, as produced by a keyboard or an on-screen equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Delete,
    Submit,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Round {
    secret: Word,
    board: Board,
    feedback: FeedbackGrid,
    cursor: Cursor,
    status: SessionStatus,
    notice: Option<Notice>,
    hints: LetterHints,
}

impl Round {
    pub(crate) fn new(secret: Word) -> Self {
        trace!("New round");
        Self {
            secret,
            board: Board::default(),
            feedback: FeedbackGrid::default(),
            cursor: Cursor::default(),
            status: SessionStatus::InProgress,
            notice: None,
            hints: LetterHints::default(),
        }
    }

    pub(crate) const fn secret(&self) -> &Word {
        &self.secret
    }

    pub(crate) const fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) const fn feedback(&self) -> &FeedbackGrid {
        &self.feedback
    }

    pub(crate) const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) const fn status(&self) -> SessionStatus {
        self.status
    }

    pub(crate) const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) const fn hints(&self) -> &LetterHints {
        &self.hints
    }

    /// Apply a gameplay input
    ///
    /// Returns `None` when the input does not apply to the current state.
    /// `Input::Restart` is never handled here; it needs a new secret.
    pub(crate) fn reduce(&self, input: Input, is_valid: impl Fn(&str) -> bool) -> Option<Self> {
        if self.status.is_over() {
            debug!("Ignoring {input:?}: round is over");
            return None;
        }

        let next = match input {
            Input::Letter(ch) => self.with_letter(ch),
            Input::Delete => self.without_letter(),
            Input::Submit => self.with_guess(is_valid),
            Input::Restart => None,
        };

        if next.is_none() {
            debug!("Ignoring {input:?} at {:?}", self.cursor);
        }
        next
    }

    fn with_letter(&self, ch: char) -> Option<Self> {
        if self.cursor.row_full() || !ch.is_ascii_alphabetic() {
            return None;
        }

        let mut next = self.clone();
        next.clear_invalid_notice();
        next.board
            .row_mut(self.cursor.row)
            .set(self.cursor.column, Some(ch.to_ascii_uppercase()));
        next.cursor.column += 1;
        Some(next)
    }

    fn without_letter(&self) -> Option<Self> {
        if self.cursor.column == 0 {
            return None;
        }

        let mut next = self.clone();
        next.clear_invalid_notice();
        next.cursor.column -= 1;
        next.board
            .row_mut(self.cursor.row)
            .set(next.cursor.column, None);
        Some(next)
    }

    fn with_guess(&self, is_valid: impl Fn(&str) -> bool) -> Option<Self> {
        if !self.cursor.row_full() {
            return None;
        }

        let letters = self.board.row(self.cursor.row).complete()?;
        let guess = Word::from_letters(letters).ok()?;
        let mut next = self.clone();

        if !is_valid(guess.text()) {
            debug!("Rejected {guess}: not in word list");
            next.notice = Some(Notice::InvalidWord(guess.text().to_string()));
            return Some(next);
        }

        let pattern = Pattern::calculate(&guess, &self.secret);
        next.feedback.record(self.cursor.row, pattern);
        next.hints.absorb(&guess, pattern);

        let guesses = self.cursor.row + 1;
        if pattern.is_perfect() {
            info!("Round won in {guesses} guesses");
            next.status = SessionStatus::Won;
            next.notice = Some(Notice::Won { guesses });
        } else if self.cursor.on_last_row() {
            info!("Round lost, secret was {}", self.secret);
            next.status = SessionStatus::Lost;
            next.notice = Some(Notice::Lost {
                secret: self.secret.text().to_string(),
            });
        } else {
            debug!("Row {} scored {}", self.cursor.row, pattern.to_emoji());
            next.cursor = Cursor::new(guesses, 0);
            next.notice = None;
        }

        Some(next)
    }

    fn clear_invalid_notice(&mut self) {
        if matches!(self.notice, Some(Notice::InvalidWord(_))) {
            self.notice = None;
        }
    }
}
