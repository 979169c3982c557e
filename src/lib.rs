//! newsbetter: split newsletter documents into sections, edit them, export the result.
//!
//! Uploaded `.docx` and `.txt` files are reduced to plain text ([`formats`]), split into
//! titled sections by a line heuristic ([`segment`]) one file at a time ([`input`]), edited in
//! a terminal UI ([`app_state`], [`ui`]) and written out as HTML or JSON ([`export`]).
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod export;
pub mod formats;
pub mod input;
pub mod section;
pub mod segment;
pub mod ui;

pub use app_state::{Action, AppState, ContentState};
pub use section::{ContentSection, SectionId, SectionKind};
pub use segment::split_into_sections;
