//! Read-only verification that stamped documents render the way the outline says.
//!
//! Each document is parsed with tree-sitter rather than scanned line by line, so the check
//! sees what a markdown renderer sees. A heading glued directly under the page-break `<div>`
//! is absorbed into the HTML block and will be flagged even though stamping found it.

use crate::annotate::starts_with_page_break;
use crate::config::Outline;
use crate::error::{BatchError, CheckError};
use crate::formats::Format;
use crate::section::SectionEntry;
use serde::Serialize;
use std::path::PathBuf;
use std::{fs, io};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// A level-1 heading as the parser sees it.
pub struct Heading {
    /// Zero-based line of the heading.
    pub line: usize,
    /// Heading text without the `#` marker.
    pub text: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One way a document disagrees with its outline entry.
pub enum Drift {
    /// No file at the resolved path.
    Missing,
    /// The parser found no level-1 heading.
    NoHeading,
    /// The first level-1 heading has different text.
    WrongHeading {
        /// Text that was found.
        found: String,
    },
    /// Line 0 is not a page-break marker.
    NoPageBreak,
}

#[derive(Serialize, Clone, Debug)]
/// Verification result for one outline entry.
pub struct FileCheck {
    /// The entry checked.
    pub entry: SectionEntry,
    /// Where the document was looked for.
    pub full_path: PathBuf,
    /// Every disagreement found; empty when the document is up to date.
    pub drift: Vec<Drift>,
}

impl FileCheck {
    #[must_use]
    /// Whether the document matches its entry.
    pub fn is_clean(&self) -> bool {
        self.drift.is_empty()
    }

    #[must_use]
    /// Single console line describing the result.
    pub fn status_line(&self) -> String {
        if self.is_clean() {
            return format!("✓ OK: {} - {}", self.entry.number, self.entry.title);
        }
        let problems: Vec<String> = self
            .drift
            .iter()
            .map(|drift| match drift {
                Drift::Missing => "does not exist".to_string(),
                Drift::NoHeading => "has no level-1 heading".to_string(),
                Drift::WrongHeading { found } => format!("heading reads {found:?}"),
                Drift::NoPageBreak => "has no leading page break".to_string(),
            })
            .collect();
        format!("✗ {}: {}", self.entry.path, problems.join(", "))
    }
}

#[must_use]
/// Closing line of a console check, preceded by a blank line.
pub fn summary(results: &[FileCheck]) -> String {
    let drifted = results.iter().filter(|r| !r.is_clean()).count();
    format!(
        "\nChecked {} files: {} up to date, {drifted} drifted",
        results.len(),
        results.len() - drifted
    )
}

#[must_use]
/// Whether every document matched; a check run fails otherwise.
pub fn all_clean(results: &[FileCheck]) -> bool {
    results.iter().all(FileCheck::is_clean)
}

/// Reusable parser and compiled title query for one format.
pub struct TitleFinder {
    parser: Parser,
    query: Query,
}

impl TitleFinder {
    /// Prepare a parser and query for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Grammar`] if the grammar cannot be loaded or the query does not
    /// compile against it.
    pub fn new(format: &impl Format) -> Result<Self, CheckError> {
        let language = format.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| CheckError::Grammar(e.to_string()))?;
        let query = Query::new(&language, format.title_query())
            .map_err(|e| CheckError::Grammar(e.to_string()))?;
        Ok(Self { parser, query })
    }

    /// First level-1 heading in `text`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Parse`] if tree-sitter produces no tree.
    pub fn first_title(&mut self, text: &str) -> Result<Option<Heading>, CheckError> {
        let tree = self.parser.parse(text, None).ok_or(CheckError::Parse)?;
        let bytes = text.as_bytes();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), bytes);

        let mut first: Option<Heading> = None;
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                let line = node.start_position().row;
                if first.as_ref().is_some_and(|h| h.line <= line) {
                    continue;
                }
                let title = node.utf8_text(bytes).unwrap_or_default().trim().to_string();
                first = Some(Heading { line, text: title });
            }
        }
        Ok(first)
    }
}

/// Verify a single document against its entry.
///
/// # Errors
///
/// Returns [`BatchError::Io`] if the document exists but cannot be read, or
/// [`BatchError::Check`] if parsing fails.
pub fn check_file(
    outline: &Outline,
    entry: &SectionEntry,
    finder: &mut TitleFinder,
) -> Result<FileCheck, BatchError> {
    let full_path = outline.resolve(entry);
    let mut drift = Vec::new();

    match fs::read_to_string(&full_path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => drift.push(Drift::Missing),
        Err(source) => {
            return Err(BatchError::Io {
                path: full_path,
                source,
            })
        }
        Ok(text) => {
            let expected = format!("{} {}", entry.number, entry.title);
            match finder.first_title(&text)? {
                None => drift.push(Drift::NoHeading),
                Some(heading) if heading.text != expected => {
                    drift.push(Drift::WrongHeading {
                        found: heading.text,
                    });
                }
                Some(_) => {}
            }
            if !starts_with_page_break(&text) {
                drift.push(Drift::NoPageBreak);
            }
        }
    }

    Ok(FileCheck {
        entry: entry.clone(),
        full_path,
        drift,
    })
}

/// Verify every entry of `outline` in sorted path order.
///
/// # Errors
///
/// Returns the first I/O or parse failure; drift is reported, not raised.
pub fn check<F>(
    outline: &Outline,
    format: &impl Format,
    mut on_file: F,
) -> Result<Vec<FileCheck>, BatchError>
where
    F: FnMut(&FileCheck),
{
    let mut finder = TitleFinder::new(format)?;
    let mut results = Vec::with_capacity(outline.entries.len());
    for entry in &outline.entries {
        let result = check_file(outline, entry, &mut finder)?;
        on_file(&result);
        results.push(result);
    }
    Ok(results)
}

#[cfg(test)]
#[path = "tests/check.rs"]
mod tests;
