//! Plain text uploads.
//!
//! Bytes are decoded as UTF-8, substituting replacement characters for invalid sequences the
//! way a browser decodes a text file, so this format never rejects an upload.

use crate::formats::{ExtractError, Format};

/// UTF-8 text files.
pub struct PlainTextFormat;

impl Format for PlainTextFormat {
    fn name(&self) -> &'static str {
        "plain text"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn mime_types(&self) -> &'static [&'static str] {
        &["text/plain"]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
    }
}
