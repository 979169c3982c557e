//! Splits extracted document text into titled newsletter sections.
//!
//! Uploaded documents reach us as plain text with all layout information (font size, bold)
//! already discarded, so section boundaries are guessed line by line. A line that is mostly
//! uppercase, mentions a typical newsletter topic, or is a short `Label:` style line starts a
//! new section; everything else is body text for the section currently being accumulated.
//!
//! The pass is a two-state machine:
//!
//! ```text
//! NoAccumulator --header-->     Accumulating(titled)
//! NoAccumulator --body-->       Accumulating("Content from <label>")
//! Accumulating  --header-->     emit if non-empty, Accumulating(titled)
//! Accumulating  --body-->       Accumulating(body appended)
//! end of input: emit if non-empty
//! ```

use crate::section::ContentSection;

/// Lines this long or longer are never headers.
pub const HEADER_MAX_CHARS: usize = 100;

/// Colon-bearing lines only count as headers below this length.
pub const COLON_HEADER_MAX_CHARS: usize = 50;

/// Topic words that mark a line as a likely section header.
pub const NEWSLETTER_TERMS: [&str; 12] = [
    "who we are",
    "calendar",
    "membership",
    "construction",
    "donations",
    "update",
    "message",
    "committee",
    "board",
    "events",
    "news",
    "announcement",
];

#[must_use]
/// Guesses whether a trimmed line names a section.
///
/// True when more than half of the characters are ASCII uppercase letters, when the line
/// mentions one of [`NEWSLETTER_TERMS`], or when it is shorter than
/// [`COLON_HEADER_MAX_CHARS`] and contains a colon. The length ceiling of
/// [`is_header_line`] is not applied here.
pub fn is_likely_header(line: &str) -> bool {
    let total = line.chars().count();
    if total == 0 {
        return false;
    }

    let upper = line.chars().filter(char::is_ascii_uppercase).count();
    // upper / total > 0.5
    if upper * 2 > total {
        return true;
    }

    let lowered = line.to_lowercase();
    if NEWSLETTER_TERMS.iter().any(|term| lowered.contains(term)) {
        return true;
    }

    total < COLON_HEADER_MAX_CHARS && line.contains(':')
}

#[must_use]
/// Applies the header predicate together with the [`HEADER_MAX_CHARS`] ceiling.
pub fn is_header_line(line: &str) -> bool {
    line.chars().count() < HEADER_MAX_CHARS && is_likely_header(line)
}

#[must_use]
/// Title given to body text that appears before any header.
pub fn fallback_title(source_label: &str) -> String {
    format!("Content from {source_label}")
}

#[must_use]
/// Splits raw text into sections in the order they appear.
///
/// Blank lines are ignored and every kept line is trimmed. Sections whose body is empty
/// (such as a header immediately followed by another header) are dropped rather than
/// emitted. Text with no non-empty lines yields no sections.
pub fn split_into_sections(text: &str, source_label: &str) -> Vec<ContentSection> {
    let mut sections = Vec::new();
    let mut current: Option<ContentSection> = None;

    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if is_header_line(line) {
            if let Some(done) = current.take() {
                push_if_nonempty(&mut sections, done);
            }
            current = Some(ContentSection::new(line, String::new()));
        } else if let Some(section) = current.as_mut() {
            section.content.push_str(line);
            section.content.push('\n');
        } else {
            current = Some(ContentSection::new(
                fallback_title(source_label),
                format!("{line}\n"),
            ));
        }
    }

    if let Some(done) = current {
        push_if_nonempty(&mut sections, done);
    }

    log::debug!(
        "Split {source_label} into {} section(s)",
        sections.len()
    );
    sections
}

fn push_if_nonempty(sections: &mut Vec<ContentSection>, section: ContentSection) {
    if !section.content.trim().is_empty() {
        sections.push(section);
    }
}

#[cfg(test)]
#[path = "tests/segment.rs"]
mod tests;
