//! Word-processing documents (`.docx`).
//!
//! A `.docx` file is a zip archive whose body lives in `word/document.xml`. Only the raw text
//! is kept: runs are concatenated, tabs and line breaks inside runs are preserved, and every
//! paragraph ends with a blank line. Styling is dropped entirely, which is why the segmenter
//! cannot rely on font size or weight to find headers.

use crate::formats::{ExtractError, Format};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// Archive member holding the main document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Office Open XML word-processing documents.
pub struct DocxFormat;

impl Format for DocxFormat {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn mime_types(&self) -> &'static [&'static str] {
        &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let xml = read_document_part(bytes)?;
        body_text(&xml)
    }
}

fn read_document_part(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingBody(DOCUMENT_PART)),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Collects the raw text of a `word/document.xml` body.
///
/// # Errors
///
/// Returns an error if the XML is malformed.
pub fn body_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    // Tab and break elements also appear in paragraph properties (tab stops), so only
    // those inside a run count as content.
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" if in_run => text.push('\t'),
                b"w:br" | b"w:cr" if in_run => text.push('\n'),
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Text(e) if in_text => {
                let unescaped = e.unescape().map_err(|err| ExtractError::Xml(err.into()))?;
                text.push_str(&unescaped);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
