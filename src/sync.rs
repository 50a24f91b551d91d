//! Keeping the highlighted menu entry in step with the scroll position.

use crate::error::ConfigError;
use crate::heading::{Heading, HeadingId};
use crate::menu::{EntryId, Menu};
use crate::waypoint::Crossing;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What to highlight when a heading has no menu entry of its own.
pub enum LookupFallback {
    /// Retry with the enclosing major heading.
    Ancestor,
    /// Do nothing.
    Ignore,
}

impl FromStr for LookupFallback {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ancestor" => Ok(Self::Ancestor),
            "ignore" => Ok(Self::Ignore),
            _ => Err(ConfigError::UnknownValue {
                setting: "lookup_fallback",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Highlights menu entries in response to viewport crossings.
pub struct Synchronizer {
    fallback: LookupFallback,
}

impl Synchronizer {
    #[must_use]
    /// Synchronizer using `fallback` for headings without an entry.
    pub fn new(fallback: LookupFallback) -> Self {
        Self { fallback }
    }

    #[must_use]
    /// Menu entry that represents `heading`, applying the fallback policy.
    pub fn resolve(&self, menu: &Menu, headings: &[Heading], heading: HeadingId) -> Option<EntryId> {
        if let Some(entry) = menu.entry_for(heading) {
            return Some(entry);
        }
        match self.fallback {
            LookupFallback::Ignore => None,
            LookupFallback::Ancestor => headings
                .get(heading.0)
                .and_then(|h| h.major)
                .filter(|major| *major != heading)
                .and_then(|major| self.resolve(menu, headings, major)),
        }
    }

    /// Select the entry for `heading`, returning it if one was found.
    pub fn highlight(
        &self,
        menu: &mut Menu,
        headings: &[Heading],
        heading: HeadingId,
    ) -> Option<EntryId> {
        let entry = self.resolve(menu, headings, heading);
        match entry {
            Some(entry) => menu.select(entry),
            None => tracing::trace!(%heading, "no menu entry to highlight"),
        }
        entry
    }

    /// React to a heading crossing the viewport top.
    ///
    /// Ignored while a programmatic scroll is in progress. Otherwise the heading
    /// named by the location hash wins if it is in view, and the crossed heading
    /// is highlighted if not.
    pub fn on_crossing(
        &self,
        menu: &mut Menu,
        headings: &[Heading],
        crossing: Crossing,
        scrolling: bool,
        hash_in_view: Option<HeadingId>,
    ) -> Option<EntryId> {
        if scrolling {
            tracing::trace!(heading = %crossing.heading, "crossing suppressed during scroll");
            return None;
        }
        self.highlight(menu, headings, hash_in_view.unwrap_or(crossing.heading))
    }
}

#[cfg(test)]
#[path = "tests/sync.rs"]
mod tests;
