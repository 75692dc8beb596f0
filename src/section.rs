//! Section metadata for a single book chapter.
//!
//! A section entry ties a markdown file to its position in the compiled book: a
//! hierarchical number such as `2.1.5` and the canonical title printed after it.
//! Entries are validated once when the outline is loaded and never mutated afterwards.

use crate::error::ConfigError;
use facet::Facet;
use serde::Serialize;

#[derive(Facet, Serialize, Clone, Debug, PartialEq, Eq)]
/// One row of the outline: which file gets which number and title.
pub struct SectionEntry {
    /// File path relative to the outline's base directory.
    pub path: String,
    /// Dot-delimited hierarchical numeral, e.g. `1.2.3`.
    pub number: String,
    /// Canonical chapter title written after the number.
    pub title: String,
}

impl SectionEntry {
    #[must_use]
    /// Build an entry from borrowed parts.
    pub fn new(path: &str, number: &str, title: &str) -> Self {
        Self {
            path: path.to_string(),
            number: number.to_string(),
            title: title.to_string(),
        }
    }

    #[must_use]
    /// The heading line this entry stamps onto its document.
    pub fn heading(&self) -> String {
        canonical_heading(&self.number, &self.title)
    }

    /// Reject entries that would produce a malformed heading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] if the path or title is blank or the number is not
    /// a dot-delimited sequence of digit groups.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidEntry {
            path: self.path.clone(),
            reason: reason.to_string(),
        };
        if self.path.trim().is_empty() {
            return Err(invalid("path is empty"));
        }
        if !is_section_number(&self.number) {
            return Err(invalid(&format!(
                "section number {:?} is not of the form 1.2.3",
                self.number
            )));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("title is empty"));
        }
        Ok(())
    }
}

#[must_use]
/// Format the level-1 heading for a number and title.
pub fn canonical_heading(number: &str, title: &str) -> String {
    format!("# {number} {title}")
}

#[must_use]
/// Whether `number` is one or more ASCII digit groups joined by dots.
pub fn is_section_number(number: &str) -> bool {
    !number.is_empty()
        && number
            .split('.')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
