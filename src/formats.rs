//! Format trait and implementations for the document types sectionstamp can verify.
//!
//! Stamping itself is a plain line rewrite. Verification parses documents properly, so a
//! heading swallowed by an HTML block or hidden in a code fence is reported as missing.

pub mod markdown;

/// Grammar and queries needed to find a document's top-level title.
pub trait Format {
    /// Tree-sitter grammar for this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing the text of each level-1 heading as `@title`.
    fn title_query(&self) -> &str;
}
