//! Core domain types for Wordle
//!
//! This module contains the word type and the guess evaluator.
//! Everything here is pure: no I/O, no shared state.

mod evaluation;
mod status;
mod word;

pub use evaluation::{Evaluation, evaluate, evaluate_str};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
