//! Guess evaluation
//!
//! Maps a guess and the secret to per-position feedback, with Wordle's
//! duplicate-letter accounting:
//! - `Correct` = letter in the same position as in the secret
//! - `Present` = letter elsewhere in the secret, while unclaimed occurrences remain
//! - `Absent`  = no unclaimed occurrence of the letter remains

use super::word::{WORD_LENGTH, Word, WordError};
use super::LetterStatus;
use std::fmt;

/// Feedback for one submitted guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterStatus; WORD_LENGTH]);

impl Evaluation {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Wrap an explicit status array
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Statuses in guess-position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a single position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Both words are validated on construction, so this cannot fail.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, LetterStatus::*, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    ///
    /// let evaluation = Evaluation::calculate(&secret, &guess);
    /// assert_eq!(evaluation.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut secret_available = secret.letter_counts();

        // First pass: Mark greens (exact position matches)
        for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                result[i] = LetterStatus::Correct;

                // Remove from available pool
                if let Some(count) = secret_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows (wrong position, but letter exists)
        for (status, letter) in result.iter_mut().zip(guess.letters()) {
            if *status == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(letter)
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Render as a string of coloured squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// Free-function form of [`Evaluation::calculate`].
#[inline]
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Evaluation {
    Evaluation::calculate(secret, guess)
}

/// Evaluate raw strings, rejecting anything that is not a 5-letter word
///
/// Nothing is truncated or padded: malformed input is an error.
///
/// # Errors
/// Returns `WordError` if either string is not a valid word.
pub fn evaluate_str(secret: &str, guess: &str) -> Result<Evaluation, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(evaluate(&secret, &guess))
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    /// Parse a feedback string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let statuses: Vec<LetterStatus> = s
            .chars()
            .map(LetterStatus::from_code)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        let statuses: [LetterStatus; WORD_LENGTH] = statuses
            .try_into()
            .map_err(|_| format!("Feedback must have {WORD_LENGTH} positions: {s}"))?;

        Ok(Self(statuses))
    }
}
