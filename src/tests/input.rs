use super::{find_documents, process_path, process_paths, process_upload, FileOutcome, Upload};
use std::fs;
use tempfile::tempdir;

fn exts() -> Vec<String> {
    vec!["docx".to_string(), "txt".to_string()]
}

#[test]
fn test_text_upload_is_segmented_with_file_label() {
    let upload = Upload::new("notes.txt", None, b"Hello\nWorld".to_vec());
    let report = process_upload(&upload);

    assert_eq!(report.name, "notes.txt");
    assert_eq!(report.size, 11);
    let sections = report.sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Content from notes.txt");
    assert_eq!(sections[0].content, "Hello\nWorld\n");
}

#[test]
fn test_unsupported_upload_is_skipped() {
    let upload = Upload::new("flyer.pdf", Some("application/pdf".into()), vec![1, 2, 3]);
    let report = process_upload(&upload);
    assert_eq!(report.outcome, FileOutcome::Skipped);
    assert!(report.sections().is_empty());
}

#[test]
fn test_corrupt_docx_fails_with_reason() {
    let upload = Upload::new("minutes.docx", None, b"not a zip".to_vec());
    let report = process_upload(&upload);
    match report.outcome {
        FileOutcome::Failed { ref reason } => assert!(!reason.is_empty()),
        ref other => panic!("expected failure, got {other:?}"),
    }
    assert!(report.sections().is_empty());
}

#[test]
fn test_empty_text_file_extracts_nothing() {
    let report = process_upload(&Upload::new("blank.txt", None, b"\n\n  \n".to_vec()));
    assert_eq!(
        report.outcome,
        FileOutcome::Extracted {
            sections: Vec::new()
        }
    );
}

#[test]
fn test_pipeline_continues_past_failures_in_order() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.txt");
    let broken = dir.path().join("b.docx");
    let skipped = dir.path().join("c.pdf");
    let last = dir.path().join("d.txt");
    fs::write(&first, "NEWS\nPond finished").unwrap();
    fs::write(&broken, "garbage").unwrap();
    fs::write(&skipped, "%PDF-1.7").unwrap();
    fs::write(&last, "EVENTS\nPicnic").unwrap();

    let reports = process_paths(&[first, broken, skipped, last]);
    let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.docx", "c.pdf", "d.txt"]);

    assert_eq!(reports[0].sections()[0].title, "NEWS");
    assert!(matches!(reports[1].outcome, FileOutcome::Failed { .. }));
    assert_eq!(reports[2].outcome, FileOutcome::Skipped);
    assert_eq!(reports[2].size, 8);
    assert_eq!(reports[3].sections()[0].title, "EVENTS");
}

#[test]
fn test_missing_supported_file_fails() {
    let dir = tempdir().unwrap();
    let report = process_path(&dir.path().join("gone.txt"));
    assert!(matches!(report.outcome, FileOutcome::Failed { .. }));
    assert_eq!(report.size, 0);
}

#[test]
fn test_find_documents_walks_directories_sorted() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::write(dir.path().join("a.docx"), "a").unwrap();
    fs::write(dir.path().join("skip.pdf"), "x").unwrap();
    fs::write(nested.join("c.TXT"), "c").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &exts());
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["a.docx", "b.txt", "c.TXT"]);
}

#[test]
fn test_find_documents_keeps_explicit_files() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("flyer.pdf");
    fs::write(&pdf, "x").unwrap();

    let found = find_documents(vec![pdf.clone()], &exts());
    assert_eq!(found, vec![pdf]);
}

#[test]
fn test_missing_path_fails_alone_and_later_files_still_ingest() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.txt");
    let gone = dir.path().join("gone.txt");
    let after = dir.path().join("after.txt");
    fs::write(&good, "NEWS\nPond finished").unwrap();
    fs::write(&after, "EVENTS\nPicnic").unwrap();

    let found = find_documents(vec![good.clone(), gone.clone(), after.clone()], &exts());
    assert_eq!(found, vec![good, gone, after]);

    let reports = process_paths(&found);
    assert_eq!(reports[0].sections()[0].title, "NEWS");
    assert!(matches!(reports[1].outcome, FileOutcome::Failed { .. }));
    assert_eq!(reports[2].sections()[0].title, "EVENTS");
}
