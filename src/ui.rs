//! The UI renders the application state into something visible and vim-able.
//!
//! The draw function dispatches based on the current view (list, editor or command line).
//! The list view shows the uploaded files above the content sections.

use crate::app_state::{AppState, UploadRecord, UploadStatus, View};
use crate::config::Config;
use edtui::{EditorTheme, EditorView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const LIST_HELP: &str =
    "↑/↓: Navigate | Ctrl+↑/↓: Move | Enter: Edit | a: Add | d: Delete | k: Kind | q: Quit";
const DETAIL_HELP: &str =
    ":w Save | :x Save & Exit | :q Quit | :wn Save & Next | :wp Save & Prev | :title <text>";

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState, _cfg: &Config) {
    match (app.current_view, app.command_origin) {
        (View::Detail, _) | (View::Command, View::Detail) => draw_detail(f, app),
        (View::List | View::Command, _) => draw_list(f, app),
    }
}

/// Formats a byte count the way the upload list shows it.
#[must_use]
pub fn format_size(bytes: usize) -> String {
    // Tenths of a kilobyte, rounded half up.
    let tenths = (bytes * 10 + 512) / 1024;
    format!("{}.{} KB", tenths / 10, tenths % 10)
}

/// Narrows the editor area so wrapped lines are at most `wrap_width` columns wide.
#[must_use]
pub fn editor_area(inner: Rect, wrap_width: usize) -> Rect {
    let width = u16::try_from(wrap_width).map_or(inner.width, |w| inner.width.min(w));
    Rect { width, ..inner }
}

fn upload_line(upload: &UploadRecord) -> Line<'static> {
    let (status, color) = match &upload.status {
        UploadStatus::Extracted(n) => (format!("{n} section(s)"), Color::Green),
        UploadStatus::Skipped => ("skipped: unsupported type".to_string(), Color::DarkGray),
        UploadStatus::Failed(reason) => (format!("failed: {reason}"), Color::Red),
    };
    Line::from(vec![
        Span::styled(
            format!("📄 {}", upload.name),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}  ", format_size(upload.size))),
        Span::styled(status, Style::default().fg(color)),
    ])
}

fn bottom_bar(app: &AppState, default_help: &str) -> Paragraph<'static> {
    if app.current_view == View::Command {
        let command_text = format!(":{}", app.command_buffer);
        Paragraph::new(command_text).block(Block::default().borders(Borders::ALL).title("Command"))
    } else {
        let text = app
            .message
            .clone()
            .unwrap_or_else(|| default_help.to_string());
        Paragraph::new(text).block(Block::default().borders(Borders::ALL))
    }
}

fn draw_list(f: &mut Frame, app: &AppState) {
    let uploads = &app.content.uploads;
    let upload_height = if uploads.is_empty() {
        0
    } else {
        u16::try_from(uploads.len().min(6)).unwrap_or(6) + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(upload_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    if !uploads.is_empty() {
        let items: Vec<ListItem> = uploads.iter().map(|u| ListItem::new(upload_line(u))).collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Uploaded Files"),
        );
        f.render_widget(list, chunks[0]);
    }

    draw_sections(f, app, chunks[1]);
    f.render_widget(bottom_bar(app, LIST_HELP), chunks[2]);
}

fn draw_sections(f: &mut Frame, app: &AppState, area: Rect) {
    let sections = &app.content.sections;
    let title = format!("Content Sections ({})", sections.len());

    if sections.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "No content yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Pass .docx or .txt files on the command line, or press 'a' to add a section."),
        ])
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let is_active = app.content.active == Some(section.id);
            let line = Line::from(vec![
                Span::styled(
                    section.title.clone(),
                    Style::default()
                        .fg(if is_active { Color::Green } else { Color::Reset })
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  [{}] {} characters",
                        section.kind,
                        section.char_count()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            let style = if i == app.current_section_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_detail(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Section header
            Constraint::Min(0),    // Editor
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let Some(section) = app.current_section() else {
        return;
    };
    let header = format!(
        "{} ({} of {}) | Type: {}",
        section.title,
        app.current_section_index + 1,
        app.content.sections.len(),
        section.kind
    );
    let title = format!(
        "Content ({} characters, wrap {})",
        section.char_count(),
        app.wrap_width
    );

    let header_widget =
        Paragraph::new(header).block(Block::default().borders(Borders::ALL).title("Section"));
    f.render_widget(header_widget, chunks[0]);

    f.render_widget(bottom_bar(app, DETAIL_HELP), chunks[2]);

    if let Some(ref mut editor_state) = app.editor_state {
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = editor_area(block.inner(chunks[1]), app.wrap_width);
        f.render_widget(block, chunks[1]);

        let editor = EditorView::new(editor_state)
            .theme(EditorTheme::default())
            .wrap(true);

        f.render_widget(editor, inner);
    }
}
