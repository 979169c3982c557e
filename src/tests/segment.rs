use super::{fallback_title, is_header_line, is_likely_header, split_into_sections};
use crate::section::SectionKind;

fn titles_and_bodies(text: &str, label: &str) -> Vec<(String, String)> {
    split_into_sections(text, label)
        .into_iter()
        .map(|s| (s.title, s.content))
        .collect()
}

#[test]
fn test_empty_input_yields_no_sections() {
    assert!(split_into_sections("", "a.txt").is_empty());
    assert!(split_into_sections("\n   \n\t\n", "a.txt").is_empty());
}

#[test]
fn test_keyword_header_collects_following_lines() {
    let sections = split_into_sections("MEMBERSHIP\nJoin today\nBenefits include X", "file.txt");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "MEMBERSHIP");
    assert_eq!(sections[0].content, "Join today\nBenefits include X\n");
    assert_eq!(sections[0].kind, SectionKind::Text);
    assert!(sections[0].editable);
}

#[test]
fn test_headerless_text_uses_fallback_title() {
    assert_eq!(
        titles_and_bodies("Hello\nWorld", "notes.txt"),
        vec![(
            "Content from notes.txt".to_string(),
            "Hello\nWorld\n".to_string()
        )]
    );
}

#[test]
fn test_consecutive_headers_drop_empty_section() {
    assert_eq!(
        titles_and_bodies("UPDATE\nCALENDAR\nSome text", "x.txt"),
        vec![("CALENDAR".to_string(), "Some text\n".to_string())]
    );
}

#[test]
fn test_trailing_header_without_body_is_discarded() {
    assert_eq!(
        titles_and_bodies("EVENTS\nPicnic on Sunday\nBOARD", "x.txt"),
        vec![("EVENTS".to_string(), "Picnic on Sunday\n".to_string())]
    );
}

#[test]
fn test_fallback_section_flushed_by_later_header() {
    let got = titles_and_bodies(
        "Welcome back everyone\n\nWHO WE ARE\nA small garden club\n",
        "intro.txt",
    );
    assert_eq!(
        got,
        vec![
            (
                "Content from intro.txt".to_string(),
                "Welcome back everyone\n".to_string()
            ),
            ("WHO WE ARE".to_string(), "A small garden club\n".to_string()),
        ]
    );
}

#[test]
fn test_lines_are_trimmed_and_crlf_handled() {
    assert_eq!(
        titles_and_bodies("  Donations  \r\n   thank you all   \r\n", "w.txt"),
        vec![("Donations".to_string(), "thank you all\n".to_string())]
    );
}

#[test]
fn test_uppercase_ratio_threshold() {
    // 3 of 6 characters uppercase is exactly half, not more.
    assert!(!is_likely_header("ABCdef"));
    assert!(is_likely_header("ABCDef"));
    assert!(is_likely_header("SPRING GALA"));
}

#[test]
fn test_keyword_match_is_case_insensitive() {
    assert!(is_likely_header("A Message from the President"));
    assert!(is_likely_header("latest news from the greenhouse"));
    assert!(!is_likely_header("the garden looks lovely this year"));
}

#[test]
fn test_colon_rule_respects_length() {
    assert!(is_likely_header("Time: 7pm"));
    let long = format!("{}: detail", "a".repeat(45));
    assert!(long.chars().count() >= 50);
    assert!(!is_likely_header(&long));
}

#[test]
fn test_colon_rule_boundary_at_fifty_chars() {
    let just_under = format!("{}:", "a".repeat(48));
    assert_eq!(just_under.chars().count(), 49);
    assert!(is_likely_header(&just_under));

    let at_limit = format!("{}:", "a".repeat(49));
    assert_eq!(at_limit.chars().count(), 50);
    assert!(!is_likely_header(&at_limit));
}

#[test]
fn test_keyword_line_over_length_ceiling_is_body() {
    let long = format!("calendar {}", "x".repeat(100));
    assert!(is_likely_header(&long));
    assert!(!is_header_line(&long));

    let text = format!("NEWS\n{long}");
    assert_eq!(
        titles_and_bodies(&text, "long.txt"),
        vec![("NEWS".to_string(), format!("{long}\n"))]
    );
}

#[test]
fn test_long_lines_never_headers() {
    let shouting = "A".repeat(100);
    assert!(is_likely_header(&shouting));
    assert!(!is_header_line(&shouting));
    assert!(is_header_line(&"A".repeat(99)));

    let text = format!("{shouting}\nbody");
    assert_eq!(
        titles_and_bodies(&text, "long.txt"),
        vec![(fallback_title("long.txt"), format!("{shouting}\nbody\n"))]
    );
}

#[test]
fn test_repeat_runs_match_except_ids() {
    let text = "NEWS\nthe pond is finished\nCalendar:\nmeeting on the 3rd\n";
    let first = split_into_sections(text, "n.txt");
    let second = split_into_sections(text, "n.txt");

    let strip = |v: &[crate::section::ContentSection]| {
        v.iter()
            .map(|s| (s.title.clone(), s.content.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(strip(&first), strip(&second));
    assert_ne!(first[0].id, second[0].id);
}

#[test]
fn test_section_ids_are_unique() {
    let sections = split_into_sections("NEWS\na\nEVENTS\nb\nBOARD\nc", "u.txt");
    assert_eq!(sections.len(), 3);
    assert_ne!(sections[0].id, sections[1].id);
    assert_ne!(sections[1].id, sections[2].id);
    assert_ne!(sections[0].id, sections[2].id);
}
