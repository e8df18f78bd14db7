//! Command implementations

pub mod console;

pub use console::{ConsolePresenter, run_console, run_console_with};
