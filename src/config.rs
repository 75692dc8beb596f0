//! Outline configuration: which documents get which section numbers.
//!
//! We look for a `sectionstamp.toml` in the working directory (or the path passed with
//! `--config`), and fall back to the outline compiled into the binary. Both use the same
//! shape: a `base_dir` plus an array of `[[pages]]` tables.

use crate::error::ConfigError;
use crate::section::SectionEntry;
use facet::Facet;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name probed in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "sectionstamp.toml";

const BUILT_IN: &str = include_str!("default_outline.toml");

#[derive(Facet, Clone, Debug)]
/// Raw outline as written in TOML, before validation.
pub struct Config {
    #[facet(default = ".".to_string())]
    /// Directory the page paths are resolved against.
    pub base_dir: String,
    #[facet(default)]
    /// Mapping rows in any order.
    pub pages: Vec<SectionEntry>,
}

#[derive(Debug)]
/// Validated, read-only outline with entries in sorted path order.
pub struct Outline {
    /// Directory the entry paths are resolved against.
    pub base_dir: PathBuf,
    /// Entries sorted by path.
    pub entries: Vec<SectionEntry>,
}

impl Config {
    /// Load the outline from `path`, else `sectionstamp.toml`, else the built-in outline.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read, or if the chosen source is
    /// not valid outline TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let local = Path::new(CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }
        Self::built_in()
    }

    /// The outline shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded outline fails to parse.
    pub fn built_in() -> Result<Self, ConfigError> {
        Self::parse(BUILT_IN, "<built-in>")
    }

    /// Read and parse an outline file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Parse outline TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text does not match the outline shape.
    pub fn parse(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        facet_toml::from_str::<Self>(contents).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            details: e.to_string(),
        })
    }

    /// Validate every entry and freeze the outline in sorted path order.
    ///
    /// # Errors
    ///
    /// Returns an error for the first invalid entry or duplicated path.
    pub fn into_outline(self) -> Result<Outline, ConfigError> {
        let mut by_path = BTreeMap::new();
        for entry in self.pages {
            entry.validate()?;
            if by_path.contains_key(&entry.path) {
                return Err(ConfigError::DuplicatePath { path: entry.path });
            }
            by_path.insert(entry.path.clone(), entry);
        }
        Ok(Outline {
            base_dir: PathBuf::from(self.base_dir),
            entries: by_path.into_values().collect(),
        })
    }
}

impl Outline {
    #[must_use]
    /// Absolute-or-relative location of an entry's document on disk.
    pub fn resolve(&self, entry: &SectionEntry) -> PathBuf {
        self.base_dir.join(&entry.path)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
