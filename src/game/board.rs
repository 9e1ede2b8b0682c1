//! Board, feedback grid and cursor value types

use crate::core::{Feedback, MAX_ROWS, Pattern, WORD_LEN};

/// One row of letter slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessRow {
    letters: [Option<char>; WORD_LEN],
}

impl GuessRow {
    /// Letter at `column`, if filled
    #[must_use]
    pub fn letter(&self, column: usize) -> Option<char> {
        self.letters.get(column).copied().flatten()
    }

    #[must_use]
    pub const fn letters(&self) -> &[Option<char>; WORD_LEN] {
        &self.letters
    }

    /// Number of filled slots
    #[must_use]
    pub fn filled(&self) -> usize {
        self.letters.iter().filter(|slot| slot.is_some()).count()
    }

    /// All letters, if every slot is filled
    #[must_use]
    pub fn complete(&self) -> Option<[char; WORD_LEN]> {
        let mut out = [' '; WORD_LEN];
        for (slot, letter) in out.iter_mut().zip(self.letters) {
            *slot = letter?;
        }
        Some(out)
    }

    pub(crate) fn set(&mut self, column: usize, letter: Option<char>) {
        self.letters[column] = letter;
    }
}

/// The full grid of guess rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    rows: [GuessRow; MAX_ROWS],
}

impl Board {
    #[must_use]
    pub fn row(&self, row: usize) -> &GuessRow {
        &self.rows[row]
    }

    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; MAX_ROWS] {
        &self.rows
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut GuessRow {
        &mut self.rows[row]
    }
}

/// State of one feedback cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unset,
    Correct,
    Present,
    Absent,
}

impl From<Feedback> for CellState {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Correct => Self::Correct,
            Feedback::Present => Self::Present,
            Feedback::Absent => Self::Absent,
        }
    }
}

/// Feedback for every submitted row
///
/// Rows are written whole, once; there is no way to change a row after it
/// has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackGrid {
    rows: [Option<Pattern>; MAX_ROWS],
}

impl FeedbackGrid {
    /// Feedback of a submitted row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Pattern> {
        self.rows.get(row).copied().flatten()
    }

    /// State of a single cell
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> CellState {
        self.row(row)
            .map_or(CellState::Unset, |pattern| pattern.feedback()[column].into())
    }

    /// Feedback of submitted rows, top to bottom
    pub fn rows_submitted(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.rows.iter().filter_map(|row| *row)
    }

    /// Number of rows that have been submitted
    #[must_use]
    pub fn submitted(&self) -> usize {
        self.rows.iter().filter(|row| row.is_some()).count()
    }

    /// Record feedback for `row`
    ///
    /// Returns `false` (and leaves the grid untouched) if the row already has
    /// feedback.
    pub(crate) fn record(&mut self, row: usize, pattern: Pattern) -> bool {
        match self.rows[row] {
            Some(_) => false,
            None => {
                self.rows[row] = Some(pattern);
                true
            }
        }
    }
}

/// Position of the next editable slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Whether the current row is full
    #[must_use]
    pub const fn row_full(self) -> bool {
        self.column == WORD_LEN
    }

    /// Whether this is the last row of the board
    #[must_use]
    pub const fn on_last_row(self) -> bool {
        self.row + 1 == MAX_ROWS
    }
}
