//! Game session state
//!
//! The 6×5 letter grid, cursors and terminal flag for one game. The letter
//! buffer here is the only source of truth for the word being typed.

use crate::core::{Evaluation, WORD_LENGTH, Word, WordError, evaluate};
use thiserror::Error;

/// Number of guess rows in the grid
pub const MAX_GUESSES: usize = 6;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Why an input was rejected
///
/// Rejections never change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("row is full, cannot add more letters")]
    RowFull,
    #[error("no letters to delete")]
    RowEmpty,
    #[error("please enter {WORD_LENGTH} letters (have {filled})")]
    IncompleteGuess { filled: usize },
    /// The letter buffer held something `Word` refuses
    #[error("invalid guess: {0}")]
    InvalidGuess(WordError),
}

/// A submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedGuess {
    pub word: Word,
    pub evaluation: Evaluation,
}

/// What a successful submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Row the guess was entered on
    pub row: usize,
    pub guess: Word,
    pub evaluation: Evaluation,
    /// State after the submission
    pub state: GameState,
}

/// One game: secret, grid, cursors and outcome
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    grid: [[Option<u8>; WORD_LENGTH]; MAX_GUESSES],
    history: Vec<SubmittedGuess>,
    row: usize,
    column: usize,
    state: GameState,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            grid: [[None; WORD_LENGTH]; MAX_GUESSES],
            history: Vec::with_capacity(MAX_GUESSES),
            row: 0,
            column: 0,
            state: GameState::Ongoing,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Active row (0-5), or 6 once all rows are used
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Next free column in the active row (0-5)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[SubmittedGuess] {
        &self.history
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Letter at a grid cell, if any
    #[must_use]
    pub fn letter_at(&self, row: usize, column: usize) -> Option<char> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .flatten()
            .map(char::from)
    }

    /// Letters typed so far in the active row
    #[must_use]
    pub fn current_letters(&self) -> String {
        self.grid
            .get(self.row)
            .map(|cells| cells.iter().flatten().map(|&b| char::from(b)).collect())
            .unwrap_or_default()
    }

    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    /// Append a letter to the active row
    ///
    /// Returns the normalized letter and the column it landed in.
    ///
    /// # Errors
    /// `GameOver`, `NotALetter` or `RowFull`; the session is unchanged.
    pub fn push_letter(&mut self, letter: char) -> Result<(char, usize), MoveError> {
        self.ensure_ongoing()?;
        if !letter.is_ascii_alphabetic() {
            return Err(MoveError::NotALetter(letter));
        }
        if self.column >= WORD_LENGTH {
            return Err(MoveError::RowFull);
        }

        let letter = letter.to_ascii_uppercase();
        let column = self.column;
        self.grid[self.row][column] = Some(letter as u8);
        self.column += 1;
        Ok((letter, column))
    }

    /// Remove the last letter of the active row
    ///
    /// Returns the removed letter and the column it was in.
    ///
    /// # Errors
    /// `GameOver` or `RowEmpty`; the session is unchanged.
    pub fn pop_letter(&mut self) -> Result<(char, usize), MoveError> {
        self.ensure_ongoing()?;
        if self.column == 0 {
            return Err(MoveError::RowEmpty);
        }

        self.column -= 1;
        let removed = self.grid[self.row][self.column].take();
        Ok((removed.map(char::from).unwrap_or(' '), self.column))
    }

    /// Submit the active row as a guess
    ///
    /// # Errors
    /// `GameOver` or `IncompleteGuess`, or `InvalidGuess` if the buffer was
    /// corrupted; the session is unchanged and the typed letters are kept.
    pub fn submit(&mut self) -> Result<Submission, MoveError> {
        self.ensure_ongoing()?;
        if self.column < WORD_LENGTH {
            return Err(MoveError::IncompleteGuess {
                filled: self.column,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(&self.grid[self.row]) {
            *slot = cell.ok_or(MoveError::IncompleteGuess {
                filled: self.column,
            })?;
        }
        let guess = Word::from_letters(letters).map_err(MoveError::InvalidGuess)?;

        let evaluation = evaluate(&self.secret, &guess);
        let row = self.row;

        self.history.push(SubmittedGuess {
            word: guess.clone(),
            evaluation,
        });
        self.row += 1;
        self.column = 0;

        if evaluation.is_perfect() {
            self.state = GameState::Won;
        } else if self.row >= MAX_GUESSES {
            self.state = GameState::Lost;
        }

        Ok(Submission {
            row,
            guess,
            evaluation,
            state: self.state,
        })
    }
}
