//! Terminal UI for the DocForge client.
//!
//! Exposes ratatui elements and the event loop required to run
//! `docforge ui`: an input line feeding the focused pane, result panes for
//! extracted text, search hits, and stats, and a toast strip fed by the
//! shared notice buffer.

pub mod app;
pub mod input;
pub mod render;

pub use app::{AppState, Focus};
pub use input::{handle_key_event, UiAction};
pub use render::draw_ui;

use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use docforge_controller::DocumentController;
use docforge_core::{MemoryNotifier, NoticeKind, Notifier, SelectedFile};

/// Run the terminal UI until the user quits.
pub async fn run_ui(
    mut controller: DocumentController,
    notifier: Arc<MemoryNotifier>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(notifier);
    // Populate the stats pane before the first draw; a failure surfaces as a
    // toast like any other.
    let _ = controller.fetch_stats().await;

    let result = event_loop(&mut terminal, &mut app, &mut controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    controller: &mut DocumentController,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, app, controller.state()))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = handle_key_event(key, app) {
                        dispatch(action, controller, app).await;
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run one user action against the controller. Failures are already
/// delivered as notices, so outcomes are not propagated further.
async fn dispatch(action: UiAction, controller: &mut DocumentController, app: &AppState) {
    match action {
        UiAction::Upload(path) => {
            if controller.state().is_uploading() {
                // Trigger is ignored while a request is out.
                return;
            }
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let media_type = mime_guess::from_path(&path)
                        .first_raw()
                        .unwrap_or("application/octet-stream");
                    let filename = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    let file = SelectedFile::new(filename, media_type, bytes);
                    if controller.select_file(file).await.is_ok() {
                        let _ = controller.upload().await;
                    }
                }
                Err(err) => {
                    app.notifier
                        .notify(
                            NoticeKind::Error,
                            &format!("Could not read {}: {}", path.display(), err),
                        )
                        .await;
                }
            }
        }
        UiAction::Search(query) => {
            let _ = controller.search(&query).await;
        }
        UiAction::RefreshStats => {
            let _ = controller.fetch_stats().await;
        }
    }
}
