//! Game state machine
//!
//! [`GameSession`] is the only mutable entry point. Presentation layers feed
//! it inputs and render [`Snapshot`]s; word lists are injected through
//! [`WordSource`].

mod board;
mod keyboard;
mod round;
mod session;
mod snapshot;
mod source;
mod stats;

pub use board::{Board, CellState, Cursor, FeedbackGrid, GuessRow};
pub use keyboard::LetterHints;
pub use round::{Input, Notice, SessionStatus};
pub use session::{GameSession, SessionObserver, SubscriptionId};
pub use snapshot::{Readiness, Snapshot};
pub use source::{SourceError, WordSource};
pub use stats::Statistics;
