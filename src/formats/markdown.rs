//! Markdown format implementation using tree-sitter-md.
//!
//! Only ATX-style level-1 headings (`# Title`) count as chapter titles; setext headings are
//! never produced by stamping, so they are not matched.

use crate::formats::Format;

/// Tree-sitter query for ATX level-1 headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn title_query(&self) -> &'static str {
        "(atx_heading (atx_h1_marker) (inline) @title)"
    }
}
