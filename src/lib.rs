//! Wordle Game
//!
//! A terminal word-guessing game: find a hidden five-letter word in six
//! guesses, with per-letter feedback after each one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Pattern, Word};
//!
//! let guess = Word::new("slate").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &secret);
//! assert_eq!(pattern.feedback()[2], Feedback::Correct);
//! println!("{}", pattern.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
