//! Configuration to acknowledge editor preferences as well as set defaults.
//!
//! Specifically, we try to find a newsbetter.toml, and if present we load settings from there.
//! This provides wrapping width, directory scan extensions and export preferences.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File consulted in the working directory.
pub const CONFIG_FILE: &str = "newsbetter.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from newsbetter.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Editor column width; text wraps here even when the terminal is wider.
    pub wrap_width: usize,
    #[facet(default = vec!["docx".to_string(), "txt".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "newsletter.html".to_string())]
    /// Where `:export` writes when no path is given.
    pub export_path: String,
    #[facet(default = "Newsletter".to_string())]
    /// Heading and document title of exports.
    pub newsletter_title: String,
}

impl Config {
    #[must_use]
    /// Parses configuration from TOML text, or `None` if it is invalid.
    pub fn from_toml(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// Load configuration from a TOML file if present and valid.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Some(config) = Self::from_toml(&contents) {
                return config;
            }
            log::warn!("Ignoring invalid configuration in {}", path.display());
        }
        Self::default()
    }

    #[must_use]
    /// Load configuration from newsbetter.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }
}

impl Default for Config {
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
