//! The core state machine bridging content sections and the interactive editor.
//!
//! Content lives in [`ContentState`], an owned value that only changes by applying an
//! [`Action`] to it: the old state goes in, the new state comes out. [`AppState`] wraps it with
//! the view state the terminal UI needs (selection, editor buffer, command line) and turns key
//! presses and `:` commands into actions.

use crate::config::Config;
use crate::export;
use crate::input::{FileOutcome, FileReport};
use crate::section::{ContentSection, SectionId, SectionKind};
use edtui::{EditorState, Lines};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of ingesting one file, kept for the upload list.
pub enum UploadStatus {
    /// Number of sections the file contributed.
    Extracted(usize),
    /// Unsupported file type.
    Skipped,
    /// Extraction failed for this reason.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A file the user submitted, as listed in the UI.
pub struct UploadRecord {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: usize,
    /// How ingestion went.
    pub status: UploadStatus,
}

impl From<&FileReport> for UploadRecord {
    fn from(report: &FileReport) -> Self {
        let status = match &report.outcome {
            FileOutcome::Extracted { sections } => UploadStatus::Extracted(sections.len()),
            FileOutcome::Skipped => UploadStatus::Skipped,
            FileOutcome::Failed { reason } => UploadStatus::Failed(reason.clone()),
        };
        Self {
            name: report.name.clone(),
            size: report.size,
            status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A change to the content state.
pub enum Action {
    /// Files are about to be processed.
    BeginProcessing,
    /// One file finished processing; its sections are appended.
    FileProcessed(FileReport),
    /// All queued files have been processed.
    FinishProcessing,
    /// Append a blank section and make it active.
    AddSection,
    /// Replace a section's title.
    UpdateTitle {
        /// Section to change.
        id: SectionId,
        /// New title.
        title: String,
    },
    /// Replace a section's body.
    UpdateContent {
        /// Section to change.
        id: SectionId,
        /// New body.
        content: String,
    },
    /// Change how a section is laid out on export.
    SetKind {
        /// Section to change.
        id: SectionId,
        /// New kind.
        kind: SectionKind,
    },
    /// Delete a section.
    RemoveSection(SectionId),
    /// Mark a section as the one being worked on.
    Activate(SectionId),
    /// Swap a section with the one before it.
    MoveUp(SectionId),
    /// Swap a section with the one after it.
    MoveDown(SectionId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Everything the user has built so far; lives only as long as the process.
pub struct ContentState {
    /// Sections in rendering order.
    pub sections: Vec<ContentSection>,
    /// Files submitted, in submission order.
    pub uploads: Vec<UploadRecord>,
    /// Whether files are currently being processed.
    pub processing: bool,
    /// Section last focused by the user.
    pub active: Option<SectionId>,
}

impl ContentState {
    #[must_use]
    /// Position of a section in the collection.
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    #[must_use]
    /// Looks up a section by id.
    pub fn section(&self, id: SectionId) -> Option<&ContentSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn editable_mut(&mut self, id: SectionId) -> Option<&mut ContentSection> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .filter(|s| s.editable)
    }

    #[must_use]
    /// Produces the state that results from applying `action`.
    ///
    /// Actions naming a section that does not exist leave the state unchanged.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::BeginProcessing => self.processing = true,
            Action::FinishProcessing => self.processing = false,
            Action::FileProcessed(report) => {
                self.uploads.push(UploadRecord::from(&report));
                if let FileOutcome::Extracted { sections } = report.outcome {
                    self.sections.extend(sections);
                }
            }
            Action::AddSection => {
                let section = ContentSection::blank();
                self.active = Some(section.id);
                self.sections.push(section);
            }
            Action::UpdateTitle { id, title } => {
                if let Some(section) = self.editable_mut(id) {
                    section.title = title;
                }
            }
            Action::UpdateContent { id, content } => {
                if let Some(section) = self.editable_mut(id) {
                    section.content = content;
                }
            }
            Action::SetKind { id, kind } => {
                if let Some(section) = self.editable_mut(id) {
                    section.kind = kind;
                }
            }
            Action::RemoveSection(id) => {
                self.sections.retain(|s| s.id != id);
                if self.active == Some(id) {
                    self.active = None;
                }
            }
            Action::Activate(id) => {
                if self.position(id).is_some() {
                    self.active = Some(id);
                }
            }
            Action::MoveUp(id) => {
                if let Some(index) = self.position(id).filter(|&i| i > 0) {
                    self.sections.swap(index, index - 1);
                }
            }
            Action::MoveDown(id) => {
                if let Some(index) = self.position(id).filter(|&i| i + 1 < self.sections.len()) {
                    self.sections.swap(index, index + 1);
                }
            }
        }
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Uploaded files and the section list.
    List,
    /// Vim-like editor for a section body.
    Detail,
    /// Captures vim-style command input after ':' keystroke.
    Command,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Whether the event loop should keep running after a command.
pub enum CommandOutcome {
    /// Keep going.
    Continue,
    /// Leave the application.
    Quit,
}

/// Bridges the content state and the interactive editor, maintaining session state.
pub struct AppState {
    /// The sections and uploads being edited.
    pub content: ContentState,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Screen to return to once a command has run.
    pub command_origin: View,
    /// Selected section in the section list.
    pub current_section_index: usize,
    /// Editor buffer content when detail view is active.
    pub editor_state: Option<EditorState>,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Maximum line width for text wrapping in the editor.
    pub wrap_width: usize,
    /// Default destination of `:export`.
    pub export_path: PathBuf,
    /// Heading used for exported documents.
    pub newsletter_title: String,
}

impl AppState {
    #[must_use]
    /// Initialises application state around existing content.
    pub fn new(content: ContentState, cfg: &Config) -> Self {
        Self {
            content,
            current_view: View::List,
            command_origin: View::List,
            current_section_index: 0,
            editor_state: None,
            command_buffer: String::new(),
            message: None,
            wrap_width: cfg.wrap_width,
            export_path: PathBuf::from(&cfg.export_path),
            newsletter_title: cfg.newsletter_title.clone(),
        }
    }

    /// Applies an action to the content and keeps the selection in range.
    pub fn dispatch(&mut self, action: Action) {
        self.content = std::mem::take(&mut self.content).apply(action);
        let len = self.content.sections.len();
        if self.current_section_index >= len {
            self.current_section_index = len.saturating_sub(1);
        }
    }

    #[must_use]
    /// The selected section, if there are any sections.
    pub fn current_section(&self) -> Option<&ContentSection> {
        self.content.sections.get(self.current_section_index)
    }

    fn current_id(&self) -> Option<SectionId> {
        self.current_section().map(|s| s.id)
    }

    #[must_use]
    /// Returns the following section index for sequential navigation.
    pub fn find_next_section(&self) -> Option<usize> {
        if self.current_section_index + 1 < self.content.sections.len() {
            Some(self.current_section_index + 1)
        } else {
            None
        }
    }

    #[must_use]
    /// Returns the preceding section index for reverse navigation.
    pub fn find_prev_section(&self) -> Option<usize> {
        if self.current_section_index > 0 {
            Some(self.current_section_index - 1)
        } else {
            None
        }
    }

    /// Moves the selection to the next section, if any.
    pub fn select_next(&mut self) {
        if let Some(next) = self.find_next_section() {
            self.current_section_index = next;
        }
    }

    /// Moves the selection to the previous section, if any.
    pub fn select_prev(&mut self) {
        if let Some(prev) = self.find_prev_section() {
            self.current_section_index = prev;
        }
    }

    /// Loads the selected section body into the editor buffer.
    pub fn enter_detail_view(&mut self) {
        let Some(section) = self.current_section() else {
            return;
        };
        let id = section.id;
        let lines = Lines::from(section.content.as_str());
        self.editor_state = Some(EditorState::new(lines));
        self.dispatch(Action::Activate(id));
        self.current_view = View::Detail;
    }

    #[must_use]
    /// Text currently in the editor buffer.
    pub fn editor_text(&self) -> Option<String> {
        self.editor_state.as_ref().map(|editor_state| {
            editor_state
                .lines
                .iter_row()
                .map(|line| line.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Writes the editor buffer back into the selected section.
    pub fn save_current(&mut self) {
        let (Some(text), Some(id)) = (self.editor_text(), self.current_id()) else {
            self.message = Some("Nothing to save".to_string());
            return;
        };
        self.dispatch(Action::UpdateContent { id, content: text });
        self.message = Some("Saved".to_string());
    }

    /// Returns to section list, optionally keeping editor changes.
    pub fn exit_detail_view(&mut self, save: bool) {
        if save && self.editor_state.is_some() {
            self.save_current();
        }
        self.editor_state = None;
        self.current_view = View::List;
    }

    /// Appends a blank section and selects it.
    pub fn add_section(&mut self) {
        self.dispatch(Action::AddSection);
        self.current_section_index = self.content.sections.len() - 1;
        self.message = Some("Added section".to_string());
    }

    /// Deletes the selected section.
    pub fn remove_current(&mut self) {
        if let Some(id) = self.current_id() {
            self.dispatch(Action::RemoveSection(id));
            self.message = Some("Removed section".to_string());
        } else {
            self.message = Some("No section to remove".to_string());
        }
    }

    /// Renames the selected section; blank titles are refused.
    pub fn rename_current(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.message = Some("Usage: title <text>".to_string());
            return;
        }
        if let Some(id) = self.current_id() {
            self.dispatch(Action::UpdateTitle {
                id,
                title: title.to_string(),
            });
            self.message = Some(format!("Renamed to {title}"));
        }
    }

    /// Sets the export layout of the selected section.
    pub fn set_kind_current(&mut self, kind: SectionKind) {
        if let Some(id) = self.current_id() {
            self.dispatch(Action::SetKind { id, kind });
            self.message = Some(format!("Type: {kind}"));
        }
    }

    /// Advances the selected section to the next kind.
    pub fn cycle_kind_current(&mut self) {
        if let Some(kind) = self.current_section().map(|s| s.kind.next()) {
            self.set_kind_current(kind);
        }
    }

    /// Moves the selected section up one place, keeping it selected.
    pub fn move_current_up(&mut self) {
        if let (Some(id), Some(prev)) = (self.current_id(), self.find_prev_section()) {
            self.dispatch(Action::MoveUp(id));
            self.current_section_index = prev;
        }
    }

    /// Moves the selected section down one place, keeping it selected.
    pub fn move_current_down(&mut self) {
        if let (Some(id), Some(next)) = (self.current_id(), self.find_next_section()) {
            self.dispatch(Action::MoveDown(id));
            self.current_section_index = next;
        }
    }

    /// Writes the HTML export to `path`, or to the configured export path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export_html(&self, path: Option<&Path>) -> io::Result<PathBuf> {
        let target = path.map_or_else(|| self.export_path.clone(), Path::to_path_buf);
        export::write_html(&target, &self.newsletter_title, &self.content.sections)?;
        Ok(target)
    }

    /// Switches to command input, remembering where to return.
    pub fn enter_command_mode(&mut self) {
        self.command_origin = self.current_view;
        self.current_view = View::Command;
        self.command_buffer.clear();
        self.message = None;
    }

    /// Leaves command input without running anything.
    pub fn cancel_command(&mut self) {
        self.current_view = self.command_origin;
        self.command_buffer.clear();
    }

    /// Runs a `:` command and reports whether to keep going.
    pub fn run_command(&mut self, cmd: &str) -> CommandOutcome {
        let cmd = cmd.trim();
        let (name, arg) = cmd.split_once(' ').unwrap_or((cmd, ""));
        let arg = arg.trim();
        self.current_view = if self.editor_state.is_some() {
            View::Detail
        } else {
            View::List
        };
        self.command_buffer.clear();

        match name {
            "w" => self.save_current(),
            "x" => {
                if self.editor_state.is_some() {
                    self.exit_detail_view(true);
                } else {
                    self.message = Some("Nothing to save".to_string());
                }
            }
            "q" | "q!" => {
                if self.editor_state.is_some() {
                    self.exit_detail_view(false);
                } else {
                    return CommandOutcome::Quit;
                }
            }
            "wn" | "wp" => {
                if self.editor_state.is_some() {
                    let target = if name == "wn" {
                        self.find_next_section()
                    } else {
                        self.find_prev_section()
                    };
                    if let Some(index) = target {
                        self.exit_detail_view(true);
                        self.current_section_index = index;
                        self.enter_detail_view();
                    } else {
                        self.save_current();
                        self.message = Some(if name == "wn" {
                            "No more sections".to_string()
                        } else {
                            "No previous sections".to_string()
                        });
                    }
                }
            }
            "new" => {
                self.exit_detail_view(true);
                self.add_section();
            }
            "rm" | "delete" => {
                self.exit_detail_view(false);
                self.remove_current();
            }
            "title" => self.rename_current(arg),
            "kind" => match arg.parse::<SectionKind>() {
                Ok(kind) => self.set_kind_current(kind),
                Err(e) => self.message = Some(e),
            },
            "export" => {
                let path = (!arg.is_empty()).then(|| Path::new(arg));
                self.message = Some(match self.export_html(path) {
                    Ok(target) => format!("Exported to {}", target.display()),
                    Err(e) => format!("Error exporting: {e}"),
                });
            }
            _ => {
                self.message = Some(format!("Unknown command: {cmd}"));
            }
        }

        CommandOutcome::Continue
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
