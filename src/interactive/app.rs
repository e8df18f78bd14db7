//! TUI application state and logic

use crate::config::{GameConfig, SecretSource};
use crate::core::WORD_LENGTH;
use crate::game::{
    Controller, DebugLog, GameSession, Key, KeyOutcome, KeyboardHints, MAX_GUESSES, MessageKind,
    Presenter, Statistics, Tile, TracingObserver,
};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before redrawing
const TICK: Duration = Duration::from_millis(100);

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

/// End-of-game message, shown once `reveal_at` has passed
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub kind: MessageKind,
    pub reveal_at: Instant,
}

/// Display state of the board, driven by the controller
#[derive(Debug, Clone)]
pub struct BoardView {
    tiles: [[(Option<char>, Tile); WORD_LENGTH]; MAX_GUESSES],
    messages: Vec<Message>,
    banner: Option<Banner>,
    reveal_delay: Duration,
}

impl BoardView {
    #[must_use]
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            tiles: [[(None, Tile::Empty); WORD_LENGTH]; MAX_GUESSES],
            messages: Vec::new(),
            banner: None,
            reveal_delay,
        }
    }

    #[must_use]
    pub fn tile(&self, row: usize, column: usize) -> (Option<char>, Tile) {
        self.tiles
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or((None, Tile::Empty))
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The end-of-game banner, once its delay has elapsed
    #[must_use]
    pub fn visible_banner(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| now >= b.reveal_at)
    }

    fn add_message(&mut self, text: &str, kind: MessageKind) {
        self.messages.push(Message {
            text: text.to_string(),
            kind,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

impl Presenter for BoardView {
    fn render_tile(&mut self, row: usize, column: usize, letter: Option<char>, tile: Tile) {
        if let Some(cell) = self.tiles.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *cell = (letter, tile);
        }
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        if kind.is_verdict() {
            self.banner = Some(Banner {
                text: text.to_string(),
                kind,
                reveal_at: Instant::now() + self.reveal_delay,
            });
        }
        self.add_message(text, kind);
    }

    fn reset(&mut self) {
        let reveal_delay = self.reveal_delay;
        *self = Self::new(reveal_delay);
    }
}

/// Application state
pub struct App {
    pub controller: Controller<BoardView, (DebugLog, TracingObserver)>,
    pub stats: Statistics,
    pub show_debug: bool,
    pub should_quit: bool,
    secrets: SecretSource,
    /// Whether the finished game has been counted in `stats`
    recorded: bool,
}

impl App {
    /// Build the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the configured secret or word list is unusable.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let mut secrets = config.secret_source()?;
        let secret = secrets
            .next_secret()
            .context("no secret words available")?;

        let mut controller = Controller::with_observer(
            GameSession::new(secret),
            BoardView::new(config.reveal_delay),
            (DebugLog::new(), TracingObserver),
        );
        controller.presenter_mut().show_message(
            "Type a 5-letter word and press Enter",
            MessageKind::Info,
        );

        Ok(Self {
            controller,
            stats: Statistics::default(),
            show_debug: config.show_debug,
            should_quit: false,
            secrets,
            recorded: false,
        })
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        self.controller.current_state()
    }

    #[must_use]
    pub fn board(&self) -> &BoardView {
        self.controller.presenter()
    }

    #[must_use]
    pub fn debug_log(&self) -> &DebugLog {
        &self.controller.observer().0
    }

    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        KeyboardHints::from_history(self.session().history())
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session().state().is_terminal()
    }

    pub fn new_game(&mut self) {
        let Some(secret) = self.secrets.next_secret() else {
            self.controller
                .presenter_mut()
                .show_message("No secret words available!", MessageKind::Warning);
            return;
        };
        self.controller.restart(secret);
        self.recorded = false;
        self.controller
            .presenter_mut()
            .show_message("New game started!", MessageKind::Info);
    }

    /// Feed one key to the game and record the result once it ends
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.controller.handle_key(key);

        let session = self.controller.current_state();
        if session.state().is_terminal() && !self.recorded {
            self.stats.record(session.state(), session.guesses_used());
            self.recorded = true;
        }
        outcome
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => self.controller.observer_mut().0.clear(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_debug = !self.show_debug,
            KeyCode::Char('n') if ctrl && self.is_game_over() => self.new_game(),
            // Further input after the game ends goes nowhere
            _ if self.is_game_over() => {}
            // Unbound Ctrl chords never type a letter
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Enter => {
                self.press(Key::Enter);
            }
            KeyCode::Backspace => {
                self.press(Key::Backspace);
            }
            KeyCode::Char(c) => {
                self.press(Key::from(c));
            }
            _ => {
                self.press(Key::Other);
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with an error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so a pending end-of-game banner gets drawn without input
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
