//! Vertical geometry of the guide page.
//!
//! The page is a column of blocks: the preamble, then for every heading a
//! title block followed by its body. A major section's body also contains all
//! of its minor sections, so hiding a major body hides their titles too. Body
//! heights come from wrapping each text line at the content width. A fixed bar
//! over the top of the viewport is matched by padding above the preamble, so
//! nothing on the page starts underneath it.

use crate::heading::{Heading, HeadingId};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Pixel sizes used to measure text.
pub struct Metrics {
    /// Width of one character.
    pub char_width: f64,
    /// Height of one line of body text.
    pub line_height: f64,
    /// Height of a heading title block.
    pub title_height: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
            title_height: 32.0,
        }
    }
}

impl Metrics {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    /// Height of `text` wrapped at `width` pixels.
    pub fn text_height(&self, text: &str, width: f64) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let per_line = (width / self.char_width).floor().max(1.0);
        let rows: f64 = text
            .lines()
            .map(|line| (line.chars().count() as f64 / per_line).ceil().max(1.0))
            .sum();
        rows * self.line_height
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Offsets of the headings shown on the page.
pub struct PageGeometry {
    tops: Vec<Option<f64>>,
    body_heights: Vec<f64>,
    top_padding: f64,
    preamble_height: f64,
    height: f64,
}

impl PageGeometry {
    #[must_use]
    /// Lay out `headings` at `content_width` below `top_padding`, showing only
    /// the bodies of the major sections in `shown_majors`.
    pub fn compute(
        preamble: &str,
        headings: &[Heading],
        shown_majors: &HashSet<HeadingId>,
        content_width: f64,
        top_padding: f64,
        metrics: &Metrics,
    ) -> Self {
        let top_padding = top_padding.max(0.0);
        let preamble_height = metrics.text_height(preamble, content_width);
        let mut y = top_padding + preamble_height;
        let mut tops = Vec::with_capacity(headings.len());
        let mut body_heights = Vec::with_capacity(headings.len());
        for heading in headings {
            let body_height = metrics.text_height(&heading.body, content_width);
            body_heights.push(body_height);
            let hidden = !heading.is_major()
                && heading.major.is_some_and(|m| !shown_majors.contains(&m));
            if hidden {
                tops.push(None);
                continue;
            }
            tops.push(Some(y));
            y += metrics.title_height;
            let body_hidden = heading.is_major() && !shown_majors.contains(&heading.id);
            if !body_hidden {
                y += body_height;
            }
        }
        Self {
            tops,
            body_heights,
            top_padding,
            preamble_height,
            height: y,
        }
    }

    #[must_use]
    /// Top offset of a heading, `None` if it is hidden.
    pub fn top(&self, heading: HeadingId) -> Option<f64> {
        self.tops.get(heading.0).copied().flatten()
    }

    #[must_use]
    /// Height of a heading's own body text.
    pub fn body_height(&self, heading: HeadingId) -> f64 {
        self.body_heights.get(heading.0).copied().unwrap_or(0.0)
    }

    #[must_use]
    /// Empty space above the preamble.
    pub fn top_padding(&self) -> f64 {
        self.top_padding
    }

    #[must_use]
    /// Height of the preamble above the first heading.
    pub fn preamble_height(&self) -> f64 {
        self.preamble_height
    }

    #[must_use]
    /// Total page height.
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    /// Visible headings with their tops, in document order.
    pub fn visible_tops(&self) -> Vec<(HeadingId, f64)> {
        self.tops
            .iter()
            .enumerate()
            .filter_map(|(i, top)| top.map(|t| (HeadingId(i), t)))
            .collect()
    }

    #[must_use]
    /// Last visible heading whose top is at or above `position`.
    pub fn heading_at(&self, position: f64) -> Option<HeadingId> {
        self.visible_tops()
            .into_iter()
            .take_while(|(_, top)| *top <= position)
            .last()
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
#[path = "tests/geometry.rs"]
mod tests;
