//! Stamping a section number and page break onto one document's text.
//!
//! This is the only transformation sectionstamp performs and it never touches the disk: the
//! batch driver reads, calls [`annotate`], and decides whether to write. The first line that
//! begins with `"# "` is overwritten with the canonical heading, whatever it said before. The
//! previous text is handed back so callers can report what was replaced.
//!
//! Both edits are planned against the original line indices and emitted in a single pass, so
//! the page break inserted at the top cannot shift the heading replacement onto the wrong line.

use crate::section::canonical_heading;
use std::borrow::Cow;
use thiserror::Error;

/// Sentinel line that forces a page break when the book is rendered to print.
pub const PAGE_BREAK: &str = r#"<div style="page-break-before: always;"></div>"#;

/// Any line 0 starting with this (after trimming) counts as an existing page break.
pub const PAGE_BREAK_PREFIX: &str = r#"<div style="page-break"#;

/// Marker for a level-1 heading line.
pub const HEADING_PREFIX: &str = "# ";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no line begins with a level-1 heading marker")]
/// The document has no line starting with [`HEADING_PREFIX`].
pub struct NoHeading;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of stamping a document.
pub struct Annotated {
    /// Full document text after stamping.
    pub text: String,
    /// The heading line that was overwritten, verbatim.
    pub previous_heading: String,
    /// Zero-based index of the canonical heading in `text`.
    pub heading_line: usize,
    /// Whether a page break line was added at the top.
    pub inserted_page_break: bool,
    /// Whether `text` differs from the input at all.
    pub changed: bool,
}

/// Apply `# {number} {title}` and a leading page break to `text`.
///
/// Line endings are normalised to `\n` first (`\r\n` and a lone `\r` both count), so CRLF
/// documents come back all-LF. Lines are then split on `\n` and rejoined with `\n`, so every
/// line other than the heading keeps its bytes, including a trailing newline or its absence.
/// A missing page break is inserted as its own line followed by one blank line.
///
/// # Errors
///
/// Returns [`NoHeading`] if no line begins with `"# "`; the caller should leave the document
/// alone in that case.
pub fn annotate(text: &str, number: &str, title: &str) -> Result<Annotated, NoHeading> {
    let normalised = normalise_line_endings(text);
    let lines: Vec<&str> = normalised.split('\n').collect();
    let heading_idx = find_heading(&lines).ok_or(NoHeading)?;
    let insert_break = !lines.first().is_some_and(|line| is_page_break(line));
    let heading = canonical_heading(number, title);

    let mut out = String::with_capacity(text.len() + PAGE_BREAK.len() + heading.len() + 2);
    if insert_break {
        out.push_str(PAGE_BREAK);
        out.push_str("\n\n");
    }
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if i == heading_idx {
            out.push_str(&heading);
        } else {
            out.push_str(line);
        }
    }

    let changed = out != text;
    Ok(Annotated {
        text: out,
        previous_heading: lines[heading_idx].to_string(),
        heading_line: if insert_break { heading_idx + 2 } else { heading_idx },
        inserted_page_break: insert_break,
        changed,
    })
}

#[must_use]
/// Whether a single line is a page-break marker.
pub fn is_page_break(line: &str) -> bool {
    line.trim().starts_with(PAGE_BREAK_PREFIX)
}

#[must_use]
/// Whether the document's first line is a page-break marker.
pub fn starts_with_page_break(text: &str) -> bool {
    text.split('\n').next().is_some_and(is_page_break)
}

fn normalise_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn find_heading(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| line.starts_with(HEADING_PREFIX))
}

#[cfg(test)]
#[path = "tests/annotate.rs"]
mod tests;
