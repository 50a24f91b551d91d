//! Format trait and implementations for user guide sources.
//!
//! A format supplies the tree-sitter grammar and query that locate headings,
//! and decides which heading depths count as major and minor sections.

use crate::heading::HeadingLevel;

pub mod markdown;

/// Grammar and heading conventions of a guide source format.
pub trait Format {
    /// Tree-sitter grammar used to parse the source.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node as `@heading`.
    fn heading_query(&self) -> &str;
    /// Numeric depth (1 for the outermost) of a heading marker node kind.
    fn marker_depth(&self, marker_kind: &str) -> Option<usize>;
    /// Depth of the guide title, if the format has one.
    fn title_depth(&self) -> Option<usize>;
    /// Role of a heading of the given depth in the menu, or `None` when the
    /// heading is body content.
    fn level_for_depth(&self, depth: usize) -> Option<HeadingLevel>;
}
