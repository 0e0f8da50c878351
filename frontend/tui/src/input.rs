//! Keyboard Input Handler
//!
//! Processes crossterm events (Key, Char, Enter) and updates `AppState`,
//! emitting a `UiAction` when a key press completes an operation.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppState, Focus};

/// An operation the event loop should run against the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Upload(PathBuf),
    Search(String),
    RefreshStats,
}

/// Handles a single keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<UiAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            None
        }
        KeyCode::Esc => {
            state.should_quit = true;
            None
        }
        KeyCode::Tab => {
            state.toggle_focus();
            None
        }
        KeyCode::F(5) => Some(UiAction::RefreshStats),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiAction::RefreshStats)
        }
        KeyCode::Enter => {
            if state.input.is_empty() {
                return None;
            }
            let entered = std::mem::take(&mut state.input);
            match state.focus {
                Focus::Upload => Some(UiAction::Upload(PathBuf::from(entered))),
                Focus::Search => Some(UiAction::Search(entered)),
            }
        }
        KeyCode::Backspace => {
            state.input.pop();
            None
        }
        KeyCode::Char(c) => {
            state.input.push(c);
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docforge_core::MemoryNotifier;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryNotifier::new()))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_builds_input() {
        let mut app = state();
        for c in "scan.pdf".chars() {
            handle_key_event(press(KeyCode::Char(c)), &mut app);
        }
        handle_key_event(press(KeyCode::Backspace), &mut app);
        assert_eq!(app.input, "scan.pd");
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut app = state();
        assert_eq!(app.focus, Focus::Upload);
        handle_key_event(press(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::Search);
        handle_key_event(press(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::Upload);
    }

    #[test]
    fn test_enter_emits_action_for_focused_pane() {
        let mut app = state();
        for c in "invoice".chars() {
            handle_key_event(press(KeyCode::Char(c)), &mut app);
        }
        handle_key_event(press(KeyCode::Tab), &mut app);
        let action = handle_key_event(press(KeyCode::Enter), &mut app);
        assert_eq!(action, Some(UiAction::Search("invoice".to_string())));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_enter_on_empty_input_is_ignored() {
        let mut app = state();
        assert_eq!(handle_key_event(press(KeyCode::Enter), &mut app), None);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = state();
        handle_key_event(press(KeyCode::Esc), &mut app);
        assert!(app.should_quit);
    }
}
