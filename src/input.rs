//! Turns uploaded files into content sections, one file at a time.
//!
//! Every file ends in exactly one [`FileOutcome`]: its sections, a skip for an unsupported
//! type, or a failure carrying the reason. A failing file never stops the files after it.

use crate::formats;
use crate::section::ContentSection;
use crate::segment::split_into_sections;
use std::path::{Path, PathBuf};
use std::{fs, io};
use walkdir::WalkDir;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A named byte buffer submitted for ingestion.
pub struct Upload {
    /// File name used for format detection and as the fallback section label.
    pub name: String,
    /// MIME type, when the source provides one.
    pub mime: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl Upload {
    #[must_use]
    /// Wraps bytes already in memory.
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime,
            bytes,
        }
    }

    /// Reads a file from disk, naming the upload after its final path component.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::new(display_name(path), None, bytes))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What happened to a single uploaded file.
pub enum FileOutcome {
    /// Text was extracted and split into these sections (possibly none).
    Extracted {
        /// Sections in document order.
        sections: Vec<ContentSection>,
    },
    /// The file type is not one we read.
    Skipped,
    /// The file could not be read or its document was corrupt.
    Failed {
        /// Human-readable cause.
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of processing one file, with the details shown in the upload list.
pub struct FileReport {
    /// File name as shown to the user.
    pub name: String,
    /// Size in bytes (zero when the file could not be read).
    pub size: usize,
    /// Result of ingestion.
    pub outcome: FileOutcome,
}

impl FileReport {
    #[must_use]
    /// Sections produced by this file, empty unless extraction succeeded.
    pub fn sections(&self) -> &[ContentSection] {
        match &self.outcome {
            FileOutcome::Extracted { sections } => sections,
            FileOutcome::Skipped | FileOutcome::Failed { .. } => &[],
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}

#[must_use]
/// Extracts and segments one upload.
pub fn process_upload(upload: &Upload) -> FileReport {
    let size = upload.bytes.len();
    let Some(format) = formats::detect(&upload.name, upload.mime.as_deref()) else {
        log::debug!("Skipping unsupported file {}", upload.name);
        return FileReport {
            name: upload.name.clone(),
            size,
            outcome: FileOutcome::Skipped,
        };
    };

    let outcome = match format.extract_text(&upload.bytes) {
        Ok(text) => {
            let sections = split_into_sections(&text, &upload.name);
            log::info!(
                "Extracted {} section(s) from {} ({})",
                sections.len(),
                upload.name,
                format.name()
            );
            FileOutcome::Extracted { sections }
        }
        Err(e) => {
            log::warn!("Error processing {} file {}: {e}", format.name(), upload.name);
            FileOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    FileReport {
        name: upload.name.clone(),
        size,
        outcome,
    }
}

#[must_use]
/// Reads and processes a file on disk.
///
/// The file type is checked from its name before anything is read, so unsupported files are
/// skipped without touching the disk.
pub fn process_path(path: &Path) -> FileReport {
    let name = display_name(path);
    if formats::detect(&name, None).is_none() {
        log::debug!("Skipping unsupported file {}", path.display());
        let size = fs::metadata(path).map_or(0, |m| usize::try_from(m.len()).unwrap_or(usize::MAX));
        return FileReport {
            name,
            size,
            outcome: FileOutcome::Skipped,
        };
    }

    match Upload::from_path(path) {
        Ok(upload) => process_upload(&upload),
        Err(e) => {
            log::warn!("Error reading {}: {e}", path.display());
            FileReport {
                name,
                size: 0,
                outcome: FileOutcome::Failed {
                    reason: e.to_string(),
                },
            }
        }
    }
}

#[must_use]
/// Processes files strictly in order, each one finishing before the next starts.
pub fn process_paths(paths: &[PathBuf]) -> Vec<FileReport> {
    paths.iter().map(|path| process_path(path)).collect()
}

#[must_use]
/// Expands the paths given by the user into the list of files to ingest.
///
/// Files named explicitly are kept whatever their extension, and whether or not they exist,
/// so unsupported ones are reported as skipped and missing ones as failed rather than
/// silently vanishing. Directories are walked recursively in file-name order, keeping only
/// files whose extension is listed in `extensions`; unreadable entries are logged and passed
/// over.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Vec<PathBuf> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            documents.extend(
                WalkDir::new(&path)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|entry| {
                        entry
                            .map_err(|e| log::warn!("Error walking {}: {e}", path.display()))
                            .ok()
                    })
                    .filter(|entry| entry.file_type().is_file())
                    .map(walkdir::DirEntry::into_path)
                    .filter(|file| has_extension(file, extensions)),
            );
        } else {
            documents.push(path);
        }
    }
    documents
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
