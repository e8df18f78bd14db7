//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterStatus};
use crate::game::{GameSession, GameState, MAX_GUESSES};
use colored::{ColoredString, Colorize};

/// A single letter drawn as a coloured tile, e.g. `[ W ]` on green
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A whole evaluated row of coloured tiles
#[must_use]
pub fn colored_row(letters: &str, evaluation: &Evaluation) -> String {
    letters
        .chars()
        .zip(evaluation.statuses())
        .map(|(letter, &status)| colored_tile(letter, status).to_string())
        .collect()
}

/// Score line for sharing, e.g. "Wordle 3/6" or "Wordle X/6"
#[must_use]
pub fn score_line(session: &GameSession) -> String {
    let score = match session.state() {
        GameState::Won => session.guesses_used().to_string(),
        GameState::Lost | GameState::Ongoing => "X".to_string(),
    };
    format!("Wordle {score}/{MAX_GUESSES}")
}

/// Spoiler-free result grid: score line, blank line, one emoji row per guess
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let mut out = score_line(session);
    out.push('\n');
    for entry in session.history() {
        out.push('\n');
        out.push_str(&entry.evaluation.to_emoji());
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn finished(secret: &str, guesses: &[&str]) -> GameSession {
        let mut session = GameSession::new(Word::new(secret).unwrap());
        for guess in guesses {
            for letter in guess.chars() {
                session.push_letter(letter).unwrap();
            }
            session.submit().unwrap();
        }
        session
    }

    #[test]
    fn colored_tile_keeps_letter() {
        colored::control::set_override(false);
        assert_eq!(colored_tile('A', LetterStatus::Correct).to_string(), " A ");
        assert_eq!(
            colored_row("WORDS", &Evaluation::PERFECT),
            " W  O  R  D  S "
        );
    }

    #[test]
    fn share_grid_for_win() {
        let session = finished("words", &["crane", "sword", "words"]);
        assert_eq!(
            share_grid(&session),
            "Wordle 3/6\n\n⬜🟨⬜⬜⬜\n🟨🟨🟨🟨🟨\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn score_line_for_loss() {
        let session = finished("words", &["crane"; 6]);
        assert_eq!(score_line(&session), "Wordle X/6");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
