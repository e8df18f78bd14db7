//! Wordle - CLI
//!
//! Play Wordle in a TUI (default) or line-by-line in the console.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use wordle_game::{
    commands::run_console,
    config::GameConfig,
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this secret for every game instead of a random one
    #[arg(long, global = true, env = "WORDLE_SECRET")]
    secret: Option<String>,

    /// File of candidate secrets, one word per line
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORD_LIST")]
    word_list: Option<PathBuf>,

    /// Seed for reproducible secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Delay before the win/lose message, in milliseconds
    #[arg(long, global = true, default_value = "500")]
    reveal_delay_ms: u64,

    /// Start with the debug panel open
    #[arg(short, long, global = true)]
    debug: bool,

    /// Write logs to this file (TUI mode has no other log output)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-oriented console mode, one guess per line
    Console,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            secret: self.secret.clone(),
            word_list: self.word_list.clone(),
            seed: self.seed,
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
            show_debug: self.debug,
        }
    }
}

/// Set up the tracing subscriber
///
/// The TUI owns the terminal, so its logs go to `log_file` or nowhere.
/// Console mode logs to stderr. `RUST_LOG` overrides the default level.
fn init_logging(command: Commands, log_file: Option<&PathBuf>) -> Result<()> {
    let writer = match (log_file, command) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        (None, Commands::Play) => BoxMakeWriter::new(io::sink),
        (None, Commands::Console) => BoxMakeWriter::new(io::stderr),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(command, cli.log_file.as_ref())?;

    let config = cli.game_config();
    tracing::debug!(?config, "resolved configuration");

    match command {
        Commands::Play => run_tui(App::new(&config)?),
        Commands::Console => run_console(&config),
    }
}
