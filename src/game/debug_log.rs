//! In-app debug log
//!
//! Bounded, newest-first record of game events. The TUI renders it as the
//! debug panel.

use super::observer::{GameEvent, GameObserver, Severity};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Entries kept before the oldest is dropped
pub const DEBUG_LOG_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Time since the log was created
    pub elapsed: Duration,
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct DebugLog {
    started: Instant,
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLog {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEBUG_LOG_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            started: Instant::now(),
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, severity: Severity, text: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(LogEntry {
            elapsed: self.started.elapsed(),
            severity,
            text: text.into(),
        });
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl GameObserver for DebugLog {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.severity(), event.to_string());
    }
}
