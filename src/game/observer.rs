//! Optional game event observers
//!
//! Observers see every controller step. They are never required for the
//! game to work: `()` is the silent observer.

use crate::core::{Evaluation, Word};
use crate::game::{MAX_GUESSES, MoveError};
use std::fmt;

/// Severity of an event, used for colouring log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Something that happened during a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    LetterAdded {
        row: usize,
        column: usize,
        letter: char,
        progress: String,
    },
    LetterDeleted {
        row: usize,
        column: usize,
        letter: char,
        progress: String,
    },
    GuessSubmitted {
        row: usize,
        guess: Word,
        evaluation: Evaluation,
    },
    Rejected(MoveError),
    Won {
        guesses: usize,
    },
    Lost {
        secret: Word,
    },
}

impl GameEvent {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Started | Self::GuessSubmitted { .. } => Severity::Info,
            Self::LetterAdded { .. } | Self::LetterDeleted { .. } | Self::Won { .. } => {
                Severity::Success
            }
            Self::Rejected(_) | Self::Lost { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "Game started"),
            Self::LetterAdded {
                row,
                column,
                letter,
                progress,
            } => write!(
                f,
                "Added \"{letter}\" at tile {} in row {} (word so far: {progress})",
                column + 1,
                row + 1
            ),
            Self::LetterDeleted {
                row,
                column,
                letter,
                progress,
            } => write!(
                f,
                "Deleted \"{letter}\" from tile {} in row {} (word so far: {progress})",
                column + 1,
                row + 1
            ),
            Self::GuessSubmitted {
                row,
                guess,
                evaluation,
            } => write!(f, "Row {}: {guess} {evaluation}", row + 1),
            Self::Rejected(reason) => write!(f, "Rejected: {reason}"),
            Self::Won { guesses } => write!(f, "Won in {guesses}/{MAX_GUESSES}"),
            Self::Lost { secret } => write!(f, "Lost, the word was {secret}"),
        }
    }
}

/// Receives game events from the controller
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn notify(&mut self, event: &GameEvent) {
        self.0.notify(event);
        self.1.notify(event);
    }
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GuessSubmitted {
                row,
                guess,
                evaluation,
            } => {
                tracing::info!(row, guess = %guess, feedback = %evaluation, "guess submitted");
            }
            GameEvent::Rejected(reason) => tracing::debug!(%reason, "input rejected"),
            GameEvent::Won { guesses } => tracing::info!(guesses, "game won"),
            GameEvent::Lost { secret } => tracing::info!(secret = %secret, "game lost"),
            other => tracing::trace!(event = %other, "game event"),
        }
    }
}
