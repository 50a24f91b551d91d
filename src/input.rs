//! Reading a guide source and extracting its headings.
//!
//! Headings are located with a tree-sitter query; the text between two
//! consecutive menu headings becomes the body of the first one.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::heading::{squash_whitespace, AnchorAllocator, Heading, HeadingId, HeadingLevel};
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

#[derive(Clone, Debug, Default)]
/// Headings and surrounding text extracted from a guide source.
pub struct ParsedGuide {
    /// Text of the guide's title heading, if present.
    pub title: Option<String>,
    /// Content between the title and the first menu heading.
    pub preamble: String,
    /// Menu headings in document order, indexed by their [`HeadingId`].
    pub headings: Vec<Heading>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// In-content link to another heading of the same guide (`[label](#anchor)`).
pub struct CrossReference {
    /// Visible link text.
    pub label: String,
    /// Target anchor without the leading `#`.
    pub anchor: String,
}

struct RawHeading {
    depth: usize,
    text: String,
    start_byte: usize,
    end_byte: usize,
    line: usize,
}

/// Read and parse the guide at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the grammar cannot be loaded,
/// or the guide contains no major heading.
pub fn read_guide(path: &Path, format: &impl Format) -> Result<ParsedGuide> {
    let source = fs::read_to_string(path)?;
    let guide = parse_guide(&source, format)?;
    if !guide.headings.iter().any(Heading::is_major) {
        return Err(Error::NoHeadings(path.to_path_buf()));
    }
    tracing::debug!(
        path = %path.display(),
        headings = guide.headings.len(),
        "parsed guide"
    );
    Ok(guide)
}

/// Parse guide source text into title, preamble and headings.
///
/// # Errors
///
/// Returns an error if the grammar or the heading query cannot be loaded, or
/// the parser produces no tree.
pub fn parse_guide(source: &str, format: &impl Format) -> Result<ParsedGuide> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("guide source".to_string()))?;

    let query = Query::new(&language, format.heading_query())?;
    let mut cursor = QueryCursor::new();
    let bytes = source.as_bytes();
    let mut raw = Vec::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some(heading) = raw_heading(capture.node, bytes, format) {
                raw.push(heading);
            }
        }
    }
    raw.sort_by_key(|h| h.start_byte);

    // Keep the title and menu headings; deeper headings stay in the body text.
    let mut title = None;
    let mut structural: Vec<(&RawHeading, Option<HeadingLevel>)> = Vec::new();
    for heading in &raw {
        if let Some(level) = format.level_for_depth(heading.depth) {
            structural.push((heading, Some(level)));
        } else if title.is_none()
            && structural.is_empty()
            && format.title_depth() == Some(heading.depth)
        {
            title = Some(heading.text.clone());
            structural.push((heading, None));
        }
    }

    let slice = |start: usize, end: usize| source.get(start..end).unwrap_or("").trim().to_string();

    let first_menu = structural.iter().position(|(_, level)| level.is_some());
    let preamble_start = structural
        .first()
        .filter(|(_, level)| level.is_none())
        .map_or(0, |(h, _)| h.end_byte);
    let preamble_end = first_menu.map_or(source.len(), |i| structural[i].0.start_byte);
    let preamble = slice(preamble_start, preamble_end.max(preamble_start));

    let mut anchors = AnchorAllocator::default();
    let mut headings = Vec::new();
    let mut current_major = None;
    for (i, (raw_heading, level)) in structural.iter().enumerate() {
        let Some(level) = *level else { continue };
        let body_end = structural
            .get(i + 1)
            .map_or(source.len(), |(next, _)| next.start_byte);
        let id = HeadingId(headings.len());
        if level == HeadingLevel::Major {
            current_major = Some(id);
        }
        headings.push(Heading {
            id,
            anchor: anchors.allocate(&raw_heading.text),
            text: raw_heading.text.clone(),
            level,
            major: current_major,
            body: slice(raw_heading.end_byte, body_end.max(raw_heading.end_byte)),
            line: raw_heading.line,
        });
    }

    Ok(ParsedGuide {
        title,
        preamble,
        headings,
    })
}

fn raw_heading(node: Node<'_>, bytes: &[u8], format: &impl Format) -> Option<RawHeading> {
    let mut walker = node.walk();
    let mut depth = None;
    let mut text = String::new();
    for child in node.children(&mut walker) {
        if let Some(d) = format.marker_depth(child.kind()) {
            depth = Some(d);
        } else if child.kind() == "inline" {
            text = child.utf8_text(bytes).unwrap_or_default().to_string();
        }
    }
    Some(RawHeading {
        depth: depth?,
        text: squash_whitespace(&text),
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
        line: node.start_position().row,
    })
}

#[must_use]
/// Find every `[label](#anchor)` link in `text`, in order of appearance.
pub fn find_cross_references(text: &str) -> Vec<CrossReference> {
    let mut refs = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find("](#") else {
            break;
        };
        let label = &after_open[..close];
        let target = &after_open[close + 3..];
        let Some(end) = target.find(')') else {
            break;
        };
        let anchor = &target[..end];
        if let Some(inner) = label.rfind('[') {
            // Nested bracket: restart from the inner one.
            rest = &after_open[inner..];
            continue;
        }
        if !anchor.is_empty() && !anchor.contains(char::is_whitespace) {
            refs.push(CrossReference {
                label: squash_whitespace(label),
                anchor: anchor.to_string(),
            });
        }
        rest = &target[end + 1..];
    }
    refs
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
