//! Word lists for the game
//!
//! Embedded lists compiled into the binary, a file loader, and [`Corpus`],
//! the [`WordSource`](crate::game::WordSource) used by the binary.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{Corpus, CorpusConfig};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
