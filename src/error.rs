//! Error types for outline loading and batch runs.
//!
//! Per-file problems the batch expects (a missing document, a document without a
//! level-1 heading) are outcomes, not errors: see [`crate::report::Outcome`]. The
//! enums here cover what stops a run outright.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Problems with the outline, all detected before any document is touched.
pub enum ConfigError {
    #[error("Failed to read outline {}: {source}", .path.display())]
    /// The outline file exists but could not be read.
    Read {
        /// Outline file that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    #[error("Failed to parse outline {origin}: {details}")]
    /// The outline is not valid TOML for the expected shape.
    Parse {
        /// File path or `<built-in>`.
        origin: String,
        /// Parser message.
        details: String,
    },
    #[error("Invalid entry for {path}: {reason}")]
    /// An entry would stamp a malformed heading.
    InvalidEntry {
        /// Path of the offending entry.
        path: String,
        /// What is wrong with it.
        reason: String,
    },
    #[error("Path {path} appears more than once in the outline")]
    /// Two entries target the same document.
    DuplicatePath {
        /// The repeated path.
        path: String,
    },
}

#[derive(Error, Debug)]
/// Faults that abort a batch part-way through.
pub enum BatchError {
    #[error("I/O error on {}: {source}", .path.display())]
    /// Reading or writing a document failed for a reason other than it being absent.
    Io {
        /// Document being processed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    #[error(transparent)]
    /// Verification could not parse a document.
    Check(#[from] CheckError),
}

#[derive(Error, Debug)]
/// Failures of the markdown parser used by verification.
pub enum CheckError {
    #[error("Failed to load grammar or title query: {0}")]
    /// The grammar could not be loaded or the query did not compile.
    Grammar(String),
    #[error("Parser produced no syntax tree")]
    /// Tree-sitter gave up on a document.
    Parse,
}
