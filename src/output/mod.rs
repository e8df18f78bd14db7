//! Terminal output formatting
//!
//! Display utilities for the console mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_game_summary, print_statistics};
