//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Banner, BoardView, Message, run_tui};
pub use rendering::ui;
