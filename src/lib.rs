//! Wordle
//!
//! A Wordle game: a duplicate-aware guess evaluator, a session state
//! machine, and a controller that drives a presenter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, evaluate_str};
//!
//! let evaluation = evaluate_str("words", "sword").unwrap();
//! assert!(evaluation.statuses().iter().all(|s| *s == LetterStatus::Present));
//! ```
//!
//! Driving a game through the controller:
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Controller, GameSession, GameState, Key, RecordingPresenter};
//!
//! let session = GameSession::new(Word::new("words").unwrap());
//! let mut controller = Controller::new(session, RecordingPresenter::default());
//! for c in "words".chars() {
//!     controller.handle_key(Key::from(c));
//! }
//! controller.handle_key(Key::Enter);
//! assert_eq!(controller.current_state().state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Session state, controller, presenter and observer capabilities
pub mod game;

// Run settings and secret selection
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
