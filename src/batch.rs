//! The batch driver: applies every outline entry to its document, one file at a time.
//!
//! A missing document or one without a level-1 heading is recorded and the run moves on.
//! Any other I/O failure stops the run immediately; files already written stay written, and
//! there is no rollback.

use crate::annotate::{annotate, NoHeading};
use crate::config::Outline;
use crate::error::BatchError;
use crate::report::{BatchReport, FileReport, Outcome};
use crate::section::SectionEntry;
use std::{fs, io};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default)]
/// Switches for a batch run.
pub struct RunOptions {
    /// Compute outcomes without writing anything.
    pub dry_run: bool,
}

/// Stamp every entry of `outline` in sorted path order.
///
/// `on_file` sees each report as soon as its document is done, so progress stays visible
/// even if a later file aborts the run.
///
/// # Errors
///
/// Returns [`BatchError::Io`] on the first read or write failure other than a missing file.
pub fn run<F>(
    outline: &Outline,
    options: RunOptions,
    mut on_file: F,
) -> Result<BatchReport, BatchError>
where
    F: FnMut(&FileReport),
{
    let mut report = BatchReport::new(options.dry_run);
    for entry in &outline.entries {
        let file = stamp_file(outline, entry, options)?;
        on_file(&file);
        report.push(file);
    }
    debug!(
        updated = report.updated,
        failed = report.failed,
        "batch finished"
    );
    Ok(report)
}

/// Stamp a single entry's document.
///
/// # Errors
///
/// Returns [`BatchError::Io`] if the document exists but cannot be read as UTF-8 text, or if
/// writing it back fails.
pub fn stamp_file(
    outline: &Outline,
    entry: &SectionEntry,
    options: RunOptions,
) -> Result<FileReport, BatchError> {
    let full_path = outline.resolve(entry);
    debug!(path = %full_path.display(), number = %entry.number, "stamping");

    let outcome = match fs::read_to_string(&full_path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %full_path.display(), "document does not exist");
            Outcome::Missing
        }
        Err(source) => {
            return Err(BatchError::Io {
                path: full_path,
                source,
            })
        }
        Ok(text) => match annotate(&text, &entry.number, &entry.title) {
            Err(NoHeading) => {
                warn!(path = %full_path.display(), "no level-1 heading found");
                Outcome::NoHeading
            }
            Ok(stamped) => {
                let written = stamped.changed && !options.dry_run;
                if written {
                    fs::write(&full_path, &stamped.text).map_err(|source| BatchError::Io {
                        path: full_path.clone(),
                        source,
                    })?;
                }
                if stamped.previous_heading != entry.heading() {
                    debug!(previous = %stamped.previous_heading, "overwrote heading");
                }
                Outcome::Updated {
                    previous_heading: stamped.previous_heading,
                    inserted_page_break: stamped.inserted_page_break,
                    written,
                }
            }
        },
    };

    Ok(FileReport {
        entry: entry.clone(),
        full_path,
        outcome,
    })
}

#[cfg(test)]
#[path = "tests/batch.rs"]
mod tests;
