//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{Action, App, action_for, run_tui};
