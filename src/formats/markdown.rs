//! Markdown format implementation using tree-sitter-md.
//!
//! ATX headings (`#` syntax) drive the menu: `#` is the guide title, `##`
//! opens a major section and `###` a minor one. Deeper headings stay in the
//! body of the section they appear in.

use crate::formats::Format;
use crate::heading::HeadingLevel;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn marker_depth(&self, marker_kind: &str) -> Option<usize> {
        match marker_kind {
            "atx_h1_marker" => Some(1),
            "atx_h2_marker" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        }
    }

    fn title_depth(&self) -> Option<usize> {
        Some(1)
    }

    fn level_for_depth(&self, depth: usize) -> Option<HeadingLevel> {
        match depth {
            2 => Some(HeadingLevel::Major),
            3 => Some(HeadingLevel::Minor),
            _ => None,
        }
    }
}
