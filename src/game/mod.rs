//! Game flow: session state, controller and the capabilities it drives
//!
//! The controller owns an explicit [`GameSession`] and talks to the outside
//! world only through [`Presenter`] and [`GameObserver`].

mod controller;
mod debug_log;
pub mod keyboard;
mod observer;
mod presenter;
mod session;
mod stats;

pub use controller::{Controller, Key, KeyOutcome};
pub use debug_log::{DEBUG_LOG_CAPACITY, DebugLog, LogEntry};
pub use keyboard::KeyboardHints;
pub use observer::{GameEvent, GameObserver, Severity, TracingObserver};
pub use presenter::{MessageKind, Presenter, RecordingPresenter, Tile};
pub use session::{GameSession, GameState, MAX_GUESSES, MoveError, Submission, SubmittedGuess};
pub use stats::Statistics;
