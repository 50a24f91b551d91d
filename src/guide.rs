//! The core state machine bridging the guide's headings and its navigation menu.
//!
//! A front end needs a single source of truth it can feed events into and render
//! from. [`Guide`] owns the headings, the menu built from them, the responsive
//! layout, the page geometry and the scroll position, and exposes one entry
//! point per page event: ready, resize, scroll, link click, title click and
//! animation frame.

use crate::config::Config;
use crate::geometry::{Metrics, PageGeometry};
use crate::heading::{Heading, HeadingId};
use crate::input::{find_cross_references, CrossReference, ParsedGuide};
use crate::layout::{LayoutAdapter, LayoutGeometry, Transition, ViewMode};
use crate::menu::{EntryId, Menu};
use crate::scroll::ScrollAnimator;
use crate::sync::Synchronizer;
use crate::waypoint;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Destination of a link click.
pub enum LinkTarget {
    /// A heading, as linked from a menu entry.
    Heading(HeadingId),
    /// An anchor, as linked from an in-content cross-reference.
    Anchor(String),
}

/// Navigation state of one loaded guide.
pub struct Guide {
    title: Option<String>,
    preamble: String,
    headings: Vec<Heading>,
    anchors: HashMap<String, HeadingId>,
    menu: Menu,
    layout: LayoutAdapter,
    metrics: Metrics,
    animator: ScrollAnimator,
    sync: Synchronizer,
    shown_majors: HashSet<HeadingId>,
    geometry: PageGeometry,
    scroll_top: f64,
    viewport_height: f64,
    hash: Option<String>,
}

impl Guide {
    #[must_use]
    /// Build the menu for a parsed guide. No layout is applied until
    /// [`Guide::initialize`].
    pub fn new(parsed: ParsedGuide, config: &Config) -> Self {
        let menu = Menu::build(&parsed.headings);
        let anchors = parsed
            .headings
            .iter()
            .map(|h| (h.anchor.clone(), h.id))
            .collect();
        let shown_majors = parsed
            .headings
            .iter()
            .filter(|h| h.is_major())
            .map(|h| h.id)
            .collect();
        Self {
            title: parsed.title,
            preamble: parsed.preamble,
            headings: parsed.headings,
            anchors,
            menu,
            layout: LayoutAdapter::new(config.layout_rules()),
            metrics: Metrics {
                char_width: config.cell_width,
                line_height: config.line_height,
                title_height: config.title_height,
            },
            animator: ScrollAnimator::new(config.speed()),
            sync: Synchronizer::new(config.fallback()),
            shown_majors,
            geometry: PageGeometry::default(),
            scroll_top: 0.0,
            viewport_height: 0.0,
            hash: None,
        }
    }

    /// Set the location hash the page was opened with, without the leading `#`.
    pub fn set_hash(&mut self, hash: Option<String>) {
        self.hash = hash.map(|h| h.trim_start_matches('#').to_string());
    }

    /// Page-ready handling: lay out for the viewport, collapse the menu and
    /// reveal the section named by the location hash.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.resize(width, height);
        self.menu.collapse();
        self.expand_for_hash();
        tracing::info!(
            headings = self.headings.len(),
            entries = self.menu.entries().len(),
            mode = ?self.layout.mode(),
            "guide initialized"
        );
    }

    /// Apply the layout for a new viewport size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport_height = height.max(0.0);
        match self.layout.apply(width) {
            Some(Transition::EnterWide) => {
                self.shown_majors = self.majors().collect();
            }
            Some(Transition::EnterNarrow) => {
                self.shown_majors.clear();
            }
            None => {}
        }
        self.relayout();
    }

    /// User-driven scroll to `position`, highlighting crossed headings.
    pub fn scroll_to_position(&mut self, position: f64) {
        let suppress = self.animator.is_scrolling();
        self.move_to(position, suppress);
    }

    /// User-driven scroll by `delta` pixels.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to_position(self.scroll_top + delta);
    }

    /// Link click: reveal the target's section and animate it to the top.
    ///
    /// Unknown targets are ignored. Returns whether an animation started.
    pub fn activate(&mut self, target: &LinkTarget, now: Instant) -> bool {
        let heading = match target {
            LinkTarget::Heading(id) => self.headings.get(id.0).map(|h| h.id),
            LinkTarget::Anchor(anchor) => self.resolve_anchor(anchor),
        };
        let Some(heading) = heading else {
            tracing::debug!(link = ?target, "link target not found");
            return false;
        };
        self.reveal(heading);
        self.hash = Some(self.headings[heading.0].anchor.clone());
        let Some(top) = self.geometry.top(heading) else {
            return false;
        };
        let offset = self.layout.geometry().map_or(0.0, |g| g.top_offset);
        let destination = (top - offset).clamp(0.0, self.max_scroll());
        self.animator.start(self.scroll_top, destination, heading, now);
        true
    }

    /// Click on a menu entry.
    pub fn activate_entry(&mut self, entry: EntryId, now: Instant) -> bool {
        match self.menu.entry(entry) {
            Some(e) => {
                let target = LinkTarget::Heading(e.target);
                self.activate(&target, now)
            }
            None => false,
        }
    }

    /// Animation frame. Returns whether the scroll position changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(frame) = self.animator.tick(now) else {
            return false;
        };
        let before = self.scroll_top;
        self.move_to(frame.position, true);
        if let Some(target) = frame.completed {
            self.sync.highlight(&mut self.menu, &self.headings, target);
        }
        (self.scroll_top - before).abs() > f64::EPSILON || frame.completed.is_some()
    }

    /// Click on a major section title. Only has an effect while the narrow
    /// layout has title toggles bound. Returns whether the body was toggled.
    pub fn toggle_major_section(&mut self, heading: HeadingId) -> bool {
        if !self.layout.toggles_bound() {
            return false;
        }
        let Some(major) = self.headings.get(heading.0).and_then(|h| h.major) else {
            return false;
        };
        if !self.shown_majors.remove(&major) {
            self.shown_majors.insert(major);
        }
        self.relayout();
        true
    }

    /// "Back to top" link: collapse the menu and jump to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.animator.stop();
        self.hash = None;
        self.scroll_top = 0.0;
        self.menu.collapse();
    }

    /// Highlight the heading named by the location hash and reveal its section.
    pub fn expand_for_hash(&mut self) {
        let Some(heading) = self.hash.as_deref().and_then(|h| self.resolve_anchor(h)) else {
            return;
        };
        self.sync.highlight(&mut self.menu, &self.headings, heading);
        self.reveal(heading);
    }

    #[must_use]
    /// Heading with the given anchor.
    pub fn resolve_anchor(&self, anchor: &str) -> Option<HeadingId> {
        self.anchors
            .get(anchor.trim_start_matches('#'))
            .copied()
    }

    #[must_use]
    /// Cross-references in the shown bodies of the sections overlapping the
    /// viewport, in document order.
    pub fn cross_references_in_view(&self) -> Vec<CrossReference> {
        self.headings
            .iter()
            .filter(|h| self.in_viewport(h.id))
            .filter(|h| !h.is_major() || self.is_body_shown(h.id))
            .flat_map(|h| find_cross_references(&h.body))
            .collect()
    }

    #[must_use]
    /// Whether any part of the heading's section overlaps the viewport.
    pub fn in_viewport(&self, heading: HeadingId) -> bool {
        let Some((top, bottom)) = self.section_bounds(heading) else {
            return false;
        };
        top < self.scroll_top + self.viewport_height && bottom > self.scroll_top
    }

    #[must_use]
    /// Vertical extent of a heading's section, `None` if it is hidden.
    pub fn section_bounds(&self, heading: HeadingId) -> Option<(f64, f64)> {
        let top = self.geometry.top(heading)?;
        let this = &self.headings[heading.0];
        let bottom = self.headings[heading.0 + 1..]
            .iter()
            .filter(|h| h.is_major() || !this.is_major())
            .find_map(|h| self.geometry.top(h.id))
            .unwrap_or(self.geometry.height());
        Some((top, bottom))
    }

    #[must_use]
    /// Guide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    /// Text before the first heading.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    #[must_use]
    /// Headings in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    #[must_use]
    /// The navigation menu.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The navigation menu, for keyboard focus movement.
    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    #[must_use]
    /// Geometry of the applied layout.
    pub fn layout(&self) -> Option<&LayoutGeometry> {
        self.layout.geometry()
    }

    #[must_use]
    /// Active view mode.
    pub fn mode(&self) -> Option<ViewMode> {
        self.layout.mode()
    }

    #[must_use]
    /// Whether titles toggle their section bodies on click.
    pub fn toggles_bound(&self) -> bool {
        self.layout.toggles_bound()
    }

    #[must_use]
    /// Vertical geometry of the page.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    #[must_use]
    /// Pixel metrics used for measuring text.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    /// Current scroll position.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    #[must_use]
    /// Largest reachable scroll position.
    pub fn max_scroll(&self) -> f64 {
        (self.geometry.height() - self.viewport_height).max(0.0)
    }

    #[must_use]
    /// Whether a programmatic scroll animation is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.animator.is_scrolling()
    }

    #[must_use]
    /// Current location hash.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    #[must_use]
    /// Whether the body of a major section is shown.
    pub fn is_body_shown(&self, major: HeadingId) -> bool {
        self.shown_majors.contains(&major)
    }

    fn majors(&self) -> impl Iterator<Item = HeadingId> + '_ {
        self.headings.iter().filter(|h| h.is_major()).map(|h| h.id)
    }

    fn reveal(&mut self, heading: HeadingId) {
        let major = self.headings.get(heading.0).and_then(|h| h.major);
        if let Some(major) = major {
            if self.shown_majors.insert(major) {
                self.relayout();
            }
        }
    }

    fn relayout(&mut self) {
        let (width, padding) = self
            .layout
            .geometry()
            .map_or((0.0, 0.0), |g| (g.content_width(), g.top_offset));
        self.geometry = PageGeometry::compute(
            &self.preamble,
            &self.headings,
            &self.shown_majors,
            width,
            padding,
            &self.metrics,
        );
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll());
    }

    fn move_to(&mut self, position: f64, suppress: bool) {
        let position = position.clamp(0.0, self.max_scroll());
        let crossed = waypoint::crossings(&self.geometry.visible_tops(), self.scroll_top, position);
        self.scroll_top = position;
        let hash_in_view = self
            .hash
            .as_deref()
            .and_then(|h| self.resolve_anchor(h))
            .filter(|h| self.in_viewport(*h));
        for crossing in crossed {
            self.sync.on_crossing(
                &mut self.menu,
                &self.headings,
                crossing,
                suppress,
                hash_in_view,
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/guide.rs"]
mod tests;
