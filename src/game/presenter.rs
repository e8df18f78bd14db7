//! Presentation capability
//!
//! The controller never touches a display directly; shells implement
//! [`Presenter`] and receive tile updates and messages.

use crate::core::LetterStatus;

/// Visual state of a single grid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// Holds a letter that has not been evaluated yet
    Filled,
    Evaluated(LetterStatus),
}

/// Kind of message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    /// Rejected input the player should know about
    Warning,
    /// End of game, player found the secret
    Won,
    /// End of game, rows exhausted
    Lost,
}

impl MessageKind {
    /// End-of-game messages, which shells may reveal after a short delay
    #[must_use]
    pub const fn is_verdict(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Rendering surface driven by the controller
pub trait Presenter {
    /// Update one tile; `letter` is `None` only for [`Tile::Empty`]
    fn render_tile(&mut self, row: usize, column: usize, letter: Option<char>, tile: Tile);

    fn show_message(&mut self, text: &str, kind: MessageKind);

    /// Called when the controller starts a fresh game on this presenter
    fn reset(&mut self) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_tile(&mut self, row: usize, column: usize, letter: Option<char>, tile: Tile) {
        (**self).render_tile(row, column, letter, tile);
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        (**self).show_message(text, kind);
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Presenter that records every call, for tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub tiles: Vec<(usize, usize, Option<char>, Tile)>,
    pub messages: Vec<(String, MessageKind)>,
    pub resets: usize,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last message shown, if any
    #[must_use]
    pub fn last_message(&self) -> Option<&(String, MessageKind)> {
        self.messages.last()
    }
}

impl Presenter for RecordingPresenter {
    fn render_tile(&mut self, row: usize, column: usize, letter: Option<char>, tile: Tile) {
        self.tiles.push((row, column, letter, tile));
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.messages.push((text.to_string(), kind));
    }

    fn reset(&mut self) {
        self.tiles.clear();
        self.messages.clear();
        self.resets += 1;
    }
}
