//! Per-process game statistics
//!
//! Nothing here is persisted; a new process starts from zero.

use super::session::{GameState, MAX_GUESSES};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index `n` counts wins in `n + 1` guesses
    pub guess_distribution: [usize; MAX_GUESSES],
}

impl Statistics {
    /// Record a finished game; ongoing games are ignored
    pub fn record(&mut self, state: GameState, guesses: usize) {
        match state {
            GameState::Ongoing => return,
            GameState::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(bucket) = guesses
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *bucket += 1;
                }
            }
            GameState::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
    }

    /// Win rate as a percentage (0-100)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
