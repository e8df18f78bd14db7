//! Line-oriented console mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::config::{GameConfig, SecretSource};
use crate::core::{LetterStatus, WORD_LENGTH, Word};
use crate::game::{
    Controller, GameSession, GameState, Key, KeyOutcome, MAX_GUESSES, MessageKind, MoveError,
    Presenter, Statistics, Tile, TracingObserver,
};
use crate::output::formatters::colored_tile;
use crate::output::{print_game_summary, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Prints evaluated rows and messages to stdout
///
/// Typed letters are already visible on the input line, so only evaluated
/// tiles are drawn.
pub struct ConsolePresenter {
    reveal_delay: Duration,
    row: Vec<(char, LetterStatus)>,
}

impl ConsolePresenter {
    #[must_use]
    pub const fn new(reveal_delay: Duration) -> Self {
        Self {
            reveal_delay,
            row: Vec::new(),
        }
    }
}

impl Presenter for ConsolePresenter {
    fn render_tile(&mut self, row: usize, column: usize, letter: Option<char>, tile: Tile) {
        let (Some(letter), Tile::Evaluated(status)) = (letter, tile) else {
            return;
        };
        self.row.push((letter, status));

        if column + 1 == WORD_LENGTH {
            let tiles: String = self
                .row
                .drain(..)
                .map(|(letter, status)| colored_tile(letter, status).to_string())
                .collect();
            println!("  {}  {tiles}", (row + 1).to_string().bright_black());
        }
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        if kind.is_verdict() {
            thread::sleep(self.reveal_delay);
        }
        match kind {
            MessageKind::Info => println!("{text}"),
            MessageKind::Warning => println!("❌ {}", text.red()),
            MessageKind::Won => println!("\n{}", text.bright_green().bold()),
            MessageKind::Lost => println!("\n{}", text.bright_red().bold()),
        }
    }

    fn reset(&mut self) {
        self.row.clear();
    }
}

/// What the player typed on one line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":new" | ":n" => Command::NewGame,
        _ => Command::Guess(line.trim().to_string()),
    }
}

/// Feed one line through the controller, key by key, then press Enter
///
/// Non-letter characters are dropped by the key filter. A line that does
/// not make a full row is cleared again so the next line starts fresh.
fn play_line<P: Presenter>(
    controller: &mut Controller<P, TracingObserver>,
    line: &str,
) -> Option<KeyOutcome> {
    let letters = line.chars().filter(char::is_ascii_alphabetic).count();
    if letters > WORD_LENGTH {
        println!(
            "❌ {}",
            format!("Too many letters, a guess has {WORD_LENGTH}").red()
        );
        return None;
    }

    for ch in line.chars() {
        controller.handle_key(Key::from(ch));
    }
    let outcome = controller.handle_key(Key::Enter);

    if let KeyOutcome::Rejected(MoveError::IncompleteGuess { .. }) = outcome {
        while controller.delete_letter().is_ok() {}
    }
    Some(outcome)
}

/// Run the console game loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails, or the
/// configured secret cannot be resolved.
pub fn run_console(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stats = run_console_with(config, stdin.lock())?;
    tracing::info!(
        played = stats.total_games,
        won = stats.games_won,
        "console session finished"
    );
    Ok(())
}

/// Run the console game loop reading lines from `input`
///
/// Returns the statistics of the games finished or abandoned.
///
/// # Errors
///
/// Returns an error if reading input fails or the configured secret cannot
/// be resolved.
pub fn run_console_with<R: BufRead>(config: &GameConfig, mut input: R) -> Result<Statistics> {
    let mut secrets = config.secret_source()?;
    let mut stats = Statistics::default();
    let mut controller = Controller::with_observer(
        GameSession::new(next_secret(&mut secrets)?),
        ConsolePresenter::new(config.reveal_delay),
        TracingObserver,
    );

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Console Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    println!(
        "  {} right spot   {} wrong spot   {} not in word",
        colored_tile('G', LetterStatus::Correct),
        colored_tile('Y', LetterStatus::Present),
        colored_tile('-', LetterStatus::Absent),
    );
    println!("Commands: ':new' for a new game, ':quit' to exit\n");

    loop {
        let state = controller.current_state();
        if state.state().is_terminal() {
            stats.record(state.state(), state.guesses_used());
            print_game_summary(state);
            print_statistics(&stats);

            match prompt(&mut input, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    controller.restart(next_secret(&mut secrets)?);
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let label = format!("Guess {}/{MAX_GUESSES}", state.row() + 1);
        let Some(line) = prompt(&mut input, &label)? else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::NewGame => {
                let state = controller.current_state();
                if state.guesses_used() > 0 {
                    // Abandoning counts as a loss
                    stats.record(GameState::Lost, state.guesses_used());
                }
                controller.restart(next_secret(&mut secrets)?);
                println!("\n🔄 New game started!\n");
            }
            Command::Guess(guess) => {
                play_line(&mut controller, &guess);
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

fn next_secret(secrets: &mut SecretSource) -> Result<Word> {
    secrets.next_secret().context("no secret words available")
}

/// Prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
