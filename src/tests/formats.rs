use super::docx::{body_text, DocxFormat, DOCUMENT_PART};
use super::plain_text::PlainTextFormat;
use super::{detect, ExtractError, Format};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#
    )
}

fn zip_with(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_docx_paragraphs_become_blank_line_separated() {
    let xml = document_xml(
        "<w:p><w:r><w:t>MEMBERSHIP</w:t></w:r></w:p>\
         <w:p><w:r><w:t xml:space=\"preserve\">Join </w:t></w:r><w:r><w:t>today</w:t></w:r></w:p>",
    );
    let bytes = zip_with(&[(DOCUMENT_PART, xml.as_str())]);

    let text = DocxFormat.extract_text(&bytes).unwrap();
    assert_eq!(text, "MEMBERSHIP\n\nJoin today\n\n");
}

#[test]
fn test_docx_tabs_breaks_and_entities() {
    let xml = document_xml(
        "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
         <w:r><w:t>Date</w:t><w:tab/><w:t>Fish &amp; Chips</w:t><w:br/><w:t>Bring a plate</w:t></w:r></w:p>\
         <w:p/>",
    );
    let text = body_text(&xml).unwrap();
    assert_eq!(text, "Date\tFish & Chips\nBring a plate\n\n\n\n");
}

#[test]
fn test_docx_rejects_non_archive() {
    let err = DocxFormat.extract_text(b"definitely not a zip").unwrap_err();
    assert!(matches!(err, ExtractError::Archive(_)));
}

#[test]
fn test_docx_requires_document_part() {
    let bytes = zip_with(&[("word/styles.xml", "<w:styles/>")]);
    let err = DocxFormat.extract_text(&bytes).unwrap_err();
    assert!(matches!(err, ExtractError::MissingBody(DOCUMENT_PART)));
}

#[test]
fn test_docx_rejects_malformed_xml() {
    let bytes = zip_with(&[(DOCUMENT_PART, "<w:document><w:body></w:document>")]);
    let err = DocxFormat.extract_text(&bytes).unwrap_err();
    assert!(matches!(err, ExtractError::Xml(_)));
}

#[test]
fn test_plain_text_is_lossy_and_strips_bom() {
    let text = PlainTextFormat
        .extract_text(b"\xEF\xBB\xBFHello\n\xFFWorld")
        .unwrap();
    assert_eq!(text, "Hello\n\u{fffd}World");
}

#[test]
fn test_detect_by_extension_and_mime() {
    assert_eq!(detect("report.docx", None).map(|f| f.name()), Some("docx"));
    assert_eq!(detect("REPORT.DOCX", None).map(|f| f.name()), Some("docx"));
    assert_eq!(detect("notes.txt", None).map(|f| f.name()), Some("plain text"));
    assert_eq!(
        detect("upload", Some("text/plain")).map(|f| f.name()),
        Some("plain text")
    );
    assert_eq!(
        detect(
            "upload",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        )
        .map(|f| f.name()),
        Some("docx")
    );
}

#[test]
fn test_detect_rejects_unsupported() {
    assert!(detect("flyer.pdf", None).is_none());
    assert!(detect("photo.png", Some("image/png")).is_none());
    assert!(detect("no_extension", None).is_none());
}
