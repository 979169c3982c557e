//! Format trait and implementations for the document types we accept.
//!
//! This module defines the `Format` trait which abstracts over uploadable document formats
//! (plain text, word-processing documents) by deciding whether an upload belongs to the format
//! and turning its bytes into plain text for the segmenter.

pub mod docx;
pub mod plain_text;

use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
/// Reasons a document could not be turned into text.
pub enum ExtractError {
    #[error("not a readable document archive: {0}")]
    /// The container is not a valid zip archive.
    Archive(#[from] zip::result::ZipError),
    #[error("document has no {0} part")]
    /// The archive lacks the part holding the document body.
    MissingBody(&'static str),
    #[error("malformed document XML: {0}")]
    /// The document body is not well-formed XML.
    Xml(#[from] quick_xml::Error),
    #[error(transparent)]
    /// Reading from the archive failed.
    Io(#[from] io::Error),
}

/// A document format we know how to read.
pub trait Format {
    /// Human-readable name used in diagnostics.
    fn name(&self) -> &'static str;
    /// File extensions (without the dot) claimed by this format.
    fn extensions(&self) -> &'static [&'static str];
    /// MIME types claimed by this format.
    fn mime_types(&self) -> &'static [&'static str];

    /// Converts the raw bytes of an upload into plain text.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid document of this format.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    /// Whether an upload with this name and optional MIME type belongs to the format.
    fn accepts(&self, file_name: &str, mime: Option<&str>) -> bool {
        if mime.is_some_and(|m| self.mime_types().iter().any(|known| *known == m)) {
            return true;
        }
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

#[must_use]
/// Finds the format for an upload, or `None` if the file type is unsupported.
///
/// Word-processing documents are tried before plain text.
pub fn detect(file_name: &str, mime: Option<&str>) -> Option<&'static dyn Format> {
    let formats: [&'static dyn Format; 2] = [&docx::DocxFormat, &plain_text::PlainTextFormat];
    formats
        .into_iter()
        .find(|format| format.accepts(file_name, mime))
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
