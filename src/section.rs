//! Content section representation for newsletter documents.
//!
//! A section is a titled block of newsletter text. Sections come either from splitting an
//! uploaded document or from the user adding a blank one, and their order in a collection is
//! the order in which they are rendered and exported.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Title given to sections created manually.
pub const BLANK_TITLE: &str = "New Section";
/// Placeholder body given to sections created manually.
pub const BLANK_CONTENT: &str = "Enter your content here...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Opaque identifier assigned once when a section is created.
pub struct SectionId(Uuid);

impl SectionId {
    #[must_use]
    /// Generates a fresh identifier that is never handed out again.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section-{}", self.0.simple())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How a section body is laid out when exported.
pub enum SectionKind {
    #[default]
    /// Free paragraphs, one per line.
    Text,
    /// Bulleted list, one item per line.
    List,
    /// Table, one row per line with tab or `|` separated cells.
    Table,
}

impl SectionKind {
    #[must_use]
    /// Lowercase name shown in the editor and used as a CSS class suffix.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::List => "list",
            Self::Table => "table",
        }
    }

    #[must_use]
    /// The kind that follows this one when the user cycles through kinds.
    pub fn next(self) -> Self {
        match self {
            Self::Text => Self::List,
            Self::List => Self::Table,
            Self::Table => Self::Text,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            other => Err(format!("Unknown section kind: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Titled block of newsletter content.
pub struct ContentSection {
    /// Identifier unique within the owning collection.
    pub id: SectionId,
    /// Short human-readable label, editable by the user.
    pub title: String,
    /// Free text belonging to the section.
    pub content: String,
    /// Layout used when exporting the body.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Whether the user may edit this section.
    pub editable: bool,
}

impl ContentSection {
    #[must_use]
    /// Creates an editable text section with a fresh identifier.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(),
            title: title.into(),
            content: content.into(),
            kind: SectionKind::Text,
            editable: true,
        }
    }

    #[must_use]
    /// Creates the placeholder section offered when the user adds one by hand.
    pub fn blank() -> Self {
        Self::new(BLANK_TITLE, BLANK_CONTENT)
    }

    #[must_use]
    /// Number of characters in the body, as shown beside each section.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
