//! Command implementations

pub mod simple;

pub use simple::{run_simple, wait_for_source};
