//! Responsive layout: a sidebar for wide viewports, a top bar for narrow ones.
//!
//! The adapter is a state machine over [`ViewMode`]. Geometry that depends
//! only on the width is recomputed on every call, while the actions that belong
//! to a mode (showing or hiding section bodies, binding title toggles) run only
//! when the mode actually changes. Applying the same width twice therefore
//! leaves the state exactly as applying it once.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Layout mode derived from the viewport width.
pub enum ViewMode {
    /// Persistent sidebar beside the content.
    Wide,
    /// Collapsible bar above the content.
    Narrow,
}

impl ViewMode {
    #[must_use]
    /// Mode for a viewport `width`: wide strictly above `threshold`.
    pub fn for_width(width: f64, threshold: f64) -> Self {
        if width > threshold {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Where the navigation container sits.
pub enum Placement {
    /// Left of the main content.
    Left,
    /// Above the main content.
    Top,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Sizing rules for both layouts.
pub struct LayoutRules {
    /// Widths strictly above this are wide.
    pub threshold: f64,
    /// Sidebar share of the viewport in wide layout.
    pub sidebar_fraction: f64,
    /// Sidebar floor in wide layout.
    pub sidebar_min_width: f64,
    /// Space between sidebar and content in wide layout.
    pub gutter: f64,
    /// Height of the fixed navigation bar in narrow layout.
    pub top_bar_height: f64,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            threshold: 800.0,
            sidebar_fraction: 0.25,
            sidebar_min_width: 200.0,
            gutter: 20.0,
            top_bar_height: 48.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Geometry of the navigation container and the main content.
pub struct LayoutGeometry {
    /// Active mode.
    pub mode: ViewMode,
    /// Viewport width the geometry was computed for.
    pub viewport_width: f64,
    /// Width of the sidebar and the navigation inside it.
    pub sidebar_width: f64,
    /// Where the sidebar is placed.
    pub placement: Placement,
    /// Left margin of the main content.
    pub main_margin_left: f64,
    /// Vertical space the fixed navigation bar covers at the top of the viewport.
    pub top_offset: f64,
}

impl LayoutGeometry {
    #[must_use]
    /// Compute the geometry for `width` under `rules`.
    pub fn compute(width: f64, rules: &LayoutRules) -> Self {
        match ViewMode::for_width(width, rules.threshold) {
            ViewMode::Wide => {
                let sidebar = (width * rules.sidebar_fraction).max(rules.sidebar_min_width);
                Self {
                    mode: ViewMode::Wide,
                    viewport_width: width,
                    sidebar_width: sidebar,
                    placement: Placement::Left,
                    main_margin_left: sidebar + rules.gutter,
                    top_offset: 0.0,
                }
            }
            ViewMode::Narrow => Self {
                mode: ViewMode::Narrow,
                viewport_width: width,
                sidebar_width: width,
                placement: Placement::Top,
                main_margin_left: 0.0,
                top_offset: rules.top_bar_height,
            },
        }
    }

    #[must_use]
    /// Width left for the main content.
    pub fn content_width(&self) -> f64 {
        (self.viewport_width - self.main_margin_left).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Action to perform when the mode changes.
pub enum Transition {
    /// Show every section body and unbind title toggles.
    EnterWide,
    /// Hide every section body and bind title toggles.
    EnterNarrow,
}

#[derive(Clone, Debug)]
/// Applies the layout for the current viewport width.
pub struct LayoutAdapter {
    rules: LayoutRules,
    geometry: Option<LayoutGeometry>,
    toggles_bound: bool,
}

impl LayoutAdapter {
    #[must_use]
    /// Adapter with no layout applied yet.
    pub fn new(rules: LayoutRules) -> Self {
        Self {
            rules,
            geometry: None,
            toggles_bound: false,
        }
    }

    #[must_use]
    /// Sizing rules in use.
    pub fn rules(&self) -> &LayoutRules {
        &self.rules
    }

    #[must_use]
    /// Geometry of the last applied width.
    pub fn geometry(&self) -> Option<&LayoutGeometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    /// Mode of the last applied width.
    pub fn mode(&self) -> Option<ViewMode> {
        self.geometry.map(|g| g.mode)
    }

    #[must_use]
    /// Whether section titles currently toggle their bodies on click.
    pub fn toggles_bound(&self) -> bool {
        self.toggles_bound
    }

    /// Apply the layout for `width`, returning the transition if the mode changed.
    pub fn apply(&mut self, width: f64) -> Option<Transition> {
        let geometry = LayoutGeometry::compute(width, &self.rules);
        let previous = self.mode();
        self.geometry = Some(geometry);
        if previous == Some(geometry.mode) {
            return None;
        }
        let transition = match geometry.mode {
            ViewMode::Wide => {
                self.toggles_bound = false;
                Transition::EnterWide
            }
            ViewMode::Narrow => {
                self.toggles_bound = true;
                Transition::EnterNarrow
            }
        };
        tracing::debug!(
            width,
            mode = ?geometry.mode,
            sidebar = geometry.sidebar_width,
            "layout mode changed"
        );
        Some(transition)
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
