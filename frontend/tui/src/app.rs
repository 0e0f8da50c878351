//! TUI App State
//!
//! Manages the top-level application state for the Ratatui terminal UI.

use std::sync::Arc;

use docforge_core::{MemoryNotifier, Notice};

/// Which operation the input line feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Upload,
    Search,
}

pub struct AppState {
    pub input: String,
    pub focus: Focus,
    pub notifier: Arc<MemoryNotifier>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(notifier: Arc<MemoryNotifier>) -> Self {
        Self {
            input: String::new(),
            focus: Focus::Upload,
            notifier,
            should_quit: false,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Upload => Focus::Search,
            Focus::Search => Focus::Upload,
        };
    }

    /// The notice shown in the toast strip.
    pub fn last_notice(&self) -> Option<Notice> {
        self.notifier.last()
    }
}
