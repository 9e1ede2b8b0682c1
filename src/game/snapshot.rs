//! Read-only view of a session for presentation layers

use super::board::{Board, Cursor, FeedbackGrid};
use super::keyboard::LetterHints;
use super::round::{Notice, SessionStatus};

/// Whether the session's word source is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// Waiting for the word source; gameplay input is ignored
    Loading,
    Ready,
    /// The word source failed; no round can be played
    Unavailable(String),
}

/// Everything a presentation layer needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub readiness: Readiness,
    pub board: Board,
    pub feedback: FeedbackGrid,
    pub cursor: Cursor,
    pub status: SessionStatus,
    pub notice: Option<Notice>,
    pub hints: LetterHints,
}

impl Snapshot {
    /// Snapshot of a session with no round yet
    pub(crate) fn empty(readiness: Readiness) -> Self {
        Self {
            readiness,
            board: Board::default(),
            feedback: FeedbackGrid::default(),
            cursor: Cursor::default(),
            status: SessionStatus::NotStarted,
            notice: None,
            hints: LetterHints::default(),
        }
    }

    /// Whether gameplay input currently has any effect
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.readiness == Readiness::Ready && self.status == SessionStatus::InProgress
    }
}
