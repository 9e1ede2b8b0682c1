//! Terminal output formatting
//!
//! Coloured rows, keyboard hints and the shareable emoji grid.

pub mod formatters;
