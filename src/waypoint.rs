//! Viewport-boundary crossing detection.
//!
//! A waypoint fires when the top of a heading passes the top of the viewport.
//! Scrolling down past a heading is a `Down` crossing, scrolling back above it
//! an `Up` crossing. A single jump can cross several headings; they are reported
//! in the order the viewport edge passes them.

use crate::heading::HeadingId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Direction the viewport edge moved when crossing a heading.
pub enum Direction {
    /// The page scrolled down past the heading.
    Down,
    /// The page scrolled up back above the heading.
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A heading's top edge crossing the viewport top.
pub struct Crossing {
    /// Heading that was crossed.
    pub heading: HeadingId,
    /// Direction of the crossing.
    pub direction: Direction,
}

/// Report crossings between scroll positions `from` and `to`.
///
/// `tops` holds each visible heading with its top offset, in document order.
/// A heading at `top` counts as passed once the scroll position reaches it.
#[must_use]
pub fn crossings(tops: &[(HeadingId, f64)], from: f64, to: f64) -> Vec<Crossing> {
    if to > from {
        tops.iter()
            .filter(|(_, top)| *top > from && *top <= to)
            .map(|(heading, _)| Crossing {
                heading: *heading,
                direction: Direction::Down,
            })
            .collect()
    } else if to < from {
        tops.iter()
            .rev()
            .filter(|(_, top)| *top > to && *top <= from)
            .map(|(heading, _)| Crossing {
                heading: *heading,
                direction: Direction::Up,
            })
            .collect()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
#[path = "tests/waypoint.rs"]
mod tests;
