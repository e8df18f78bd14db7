//! On-screen keyboard hints
//!
//! Best-known status per letter over all submitted guesses.

use super::session::SubmittedGuess;
use crate::core::LetterStatus;

/// QWERTY rows, as drawn by the shells
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: [Option<LetterStatus>; 26],
}

impl KeyboardHints {
    #[must_use]
    pub fn from_history(history: &[SubmittedGuess]) -> Self {
        let mut hints = Self::default();
        for entry in history {
            for (&letter, &status) in entry
                .word
                .letters()
                .iter()
                .zip(entry.evaluation.statuses())
            {
                hints.record(letter, status);
            }
        }
        hints
    }

    /// Merge one observation; stronger feedback wins
    pub fn record(&mut self, letter: u8, status: LetterStatus) {
        if let Some(slot) = Self::slot(letter).map(|i| &mut self.hints[i]) {
            *slot = (*slot).max(Some(status));
        }
    }

    /// Hint for a letter, `None` if it has not been guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::slot)
            .and_then(|i| self.hints[i])
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, Word};

    fn submitted(secret: &str, guess: &str) -> SubmittedGuess {
        let secret = Word::new(secret).unwrap();
        let word = Word::new(guess).unwrap();
        SubmittedGuess {
            evaluation: Evaluation::calculate(&secret, &word),
            word,
        }
    }

    #[test]
    fn unseen_letters_have_no_hint() {
        let hints = KeyboardHints::from_history(&[]);
        assert_eq!(hints.status('A'), None);
    }

    #[test]
    fn stronger_feedback_wins() {
        let history = [submitted("words", "sword"), submitted("words", "wordy")];
        let hints = KeyboardHints::from_history(&history);

        // W was Present in SWORD, then Correct in WORDY
        assert_eq!(hints.status('W'), Some(LetterStatus::Correct));
        assert_eq!(hints.status('S'), Some(LetterStatus::Present));
        assert_eq!(hints.status('Y'), Some(LetterStatus::Absent));
        assert_eq!(hints.status('z'), None);
    }

    #[test]
    fn weaker_feedback_does_not_downgrade() {
        let mut hints = KeyboardHints::default();
        hints.record(b'E', LetterStatus::Correct);
        hints.record(b'e', LetterStatus::Absent);
        assert_eq!(hints.status('e'), Some(LetterStatus::Correct));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut hints = KeyboardHints::default();
        hints.record(b'1', LetterStatus::Correct);
        assert_eq!(hints.status('1'), None);
        assert_eq!(hints.status('é'), None);
    }
}
