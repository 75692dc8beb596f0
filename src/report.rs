//! Per-file outcomes and the batch tally.
//!
//! Reports are plain data: the binary renders them as console lines or serialises them to
//! JSON, and tests inspect them directly.

use crate::section::SectionEntry;
use serde::Serialize;
use std::path::PathBuf;

const BANNER_WIDTH: usize = 60;

/// Opening line of a console run, followed by a blank line.
pub const HEADER: &str = "Updating all pages with section numbers and page breaks...\n";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
/// What happened to one document.
pub enum Outcome {
    /// The heading was stamped (and the page break ensured).
    Updated {
        /// Heading line that was overwritten.
        previous_heading: String,
        /// Whether a page break was added at the top.
        inserted_page_break: bool,
        /// Whether the file on disk was rewritten (false for dry runs and no-op stamps).
        written: bool,
    },
    /// No file exists at the resolved path.
    Missing,
    /// The file has no line starting with `"# "`; it was left untouched.
    NoHeading,
}

#[derive(Serialize, Clone, Debug)]
/// Outcome for one outline entry.
pub struct FileReport {
    /// The entry that was applied.
    pub entry: SectionEntry,
    /// Where the document was looked for.
    pub full_path: PathBuf,
    /// What happened.
    pub outcome: Outcome,
}

impl FileReport {
    #[must_use]
    /// Whether this entry counts towards the updated tally.
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, Outcome::Updated { .. })
    }

    #[must_use]
    /// Single console line describing the outcome.
    pub fn status_line(&self, dry_run: bool) -> String {
        match self.outcome {
            Outcome::Updated { .. } => {
                let verb = if dry_run { "Would update" } else { "Updated" };
                format!("✓ {verb}: {} - {}", self.entry.number, self.entry.title)
            }
            Outcome::Missing => format!("Warning: {} does not exist", self.full_path.display()),
            Outcome::NoHeading => format!("Warning: No heading found in {}", self.entry.path),
        }
    }
}

#[derive(Serialize, Clone, Debug, Default)]
/// Everything a batch run did, in processing order.
pub struct BatchReport {
    /// Whether writes were suppressed.
    pub dry_run: bool,
    /// Documents stamped successfully.
    pub updated: usize,
    /// Documents that were missing or had no heading.
    pub failed: usize,
    /// One report per outline entry.
    pub files: Vec<FileReport>,
}

impl BatchReport {
    #[must_use]
    /// Empty report for a run.
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Record one file and update the tally.
    pub fn push(&mut self, file: FileReport) {
        if file.succeeded() {
            self.updated += 1;
        } else {
            self.failed += 1;
        }
        self.files.push(file);
    }

    #[must_use]
    /// Closing summary block, preceded by a blank line.
    pub fn summary(&self) -> String {
        let banner = "=".repeat(BANNER_WIDTH);
        format!(
            "\n{banner}\nSummary: {} files updated, {} failed\n{banner}",
            self.updated, self.failed
        )
    }
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
