//! Heading representation for the user guide.
//!
//! A heading marks either a major section or a minor subsection of the guide.
//! Headings are identified by a [`HeadingId`] assigned in document order, which
//! stays stable for the lifetime of a loaded guide. Text is only ever used for
//! display: two headings with the same title are still two distinct headings.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Stable identifier of a heading, equal to its position in document order.
pub struct HeadingId(pub usize);

impl fmt::Display for HeadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Nesting level of a heading in the guide.
pub enum HeadingLevel {
    /// Top-level section, listed at the root of the menu.
    Major,
    /// Subsection, listed under its enclosing major section.
    Minor,
}

#[derive(Clone, Debug)]
/// A titled section marker in the guide.
pub struct Heading {
    /// Identifier assigned in document order.
    pub id: HeadingId,
    /// Heading text with whitespace runs squashed to single spaces.
    pub text: String,
    /// Major or minor.
    pub level: HeadingLevel,
    /// Enclosing major section. A major heading encloses itself; a minor heading
    /// that precedes every major heading has none.
    pub major: Option<HeadingId>,
    /// Unique link target generated from the text.
    pub anchor: String,
    /// Content between this heading and the next one.
    pub body: String,
    /// Source line of the heading (0-indexed).
    pub line: usize,
}

impl Heading {
    #[must_use]
    /// Whether this heading is a major section.
    pub fn is_major(&self) -> bool {
        self.level == HeadingLevel::Major
    }
}

#[must_use]
/// Collapse every whitespace run to a single space and trim both ends.
pub fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[must_use]
/// Lowercased, hyphen-separated slug of a heading's text.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

#[derive(Default)]
/// Hands out unique anchors, suffixing repeats with `-1`, `-2`, and so on.
pub struct AnchorAllocator {
    seen: HashMap<String, usize>,
}

impl AnchorAllocator {
    /// Allocate a unique anchor for `text`.
    pub fn allocate(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut count = self.seen.get(&base).copied().unwrap_or(0);
        let mut candidate = base.clone();
        while self.seen.contains_key(&candidate) {
            count += 1;
            candidate = format!("{base}-{count}");
        }
        self.seen.insert(base, count);
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
