//! TUI Rendering
//!
//! Translates controller state into Ratatui widgets and draws the frame:
//! toast strip on top, result panes in the middle, input line at the bottom.

use docforge_controller::render::{hit_view, stats_view, upload_view};
use docforge_core::{NoticeKind, ViewState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Focus};

/// Main draw function.
pub fn draw_ui(f: &mut Frame, app: &AppState, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Toast strip
            Constraint::Min(8),    // Result panes
            Constraint::Length(3), // Input line
        ])
        .split(f.size());

    draw_toast(f, app, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_upload_pane(f, view, panes[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(panes[1]);

    draw_results_pane(f, view, right[0]);
    draw_stats_pane(f, view, right[1]);

    draw_input(f, app, chunks[2]);
}

fn draw_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(notice) = app.last_notice() else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let widget = Paragraph::new(notice.message).style(Style::default().fg(color));
    f.render_widget(widget, area);
}

fn draw_upload_pane(f: &mut Frame, view: &ViewState, area: Rect) {
    let body = match view.upload() {
        Some(result) => {
            let rendered = upload_view(result);
            let mut text = rendered.extracted_text;
            if !rendered.metadata_rows.is_empty() {
                text.push_str("\n\n");
                text.push_str(&rendered.metadata_rows.join("\n"));
            }
            text
        }
        None => "No document uploaded yet.".to_string(),
    };
    let title = if view.is_uploading() {
        "Extracted Text (uploading...)"
    } else {
        "Extracted Text"
    };
    let widget = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn draw_results_pane(f: &mut Frame, view: &ViewState, area: Rect) {
    let body = if view.results().is_empty() {
        "No results.".to_string()
    } else {
        view.results()
            .iter()
            .map(|hit| {
                let rendered = hit_view(hit);
                format!("[{}] {}\n{}", rendered.id, rendered.file, rendered.excerpt)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    let widget = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Search Results").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn draw_stats_pane(f: &mut Frame, view: &ViewState, area: Rect) {
    let body = match view.stats() {
        Some(snapshot) => {
            let rendered = stats_view(snapshot);
            let mut lines = vec![format!("Total documents: {}", rendered.total)];
            lines.extend(rendered.type_rows);
            lines.join("\n")
        }
        None => "No stats fetched.".to_string(),
    };
    let widget = Paragraph::new(body)
        .block(Block::default().title("Stats (Ctrl-R refresh)").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn draw_input(f: &mut Frame, app: &AppState, area: Rect) {
    let title = match app.focus {
        Focus::Upload => "File path (Tab switches, Enter uploads)",
        Focus::Search => "Search query (Tab switches, Enter searches)",
    };
    let widget = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(widget, area);
}
