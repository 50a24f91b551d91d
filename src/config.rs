//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a guidenav.toml, and if present we load settings from there.
//! This provides the layout threshold, sidebar sizing, scroll speed, lookup policy and the
//! pixel metrics used to map the guide onto terminal cells.

use crate::error::ConfigError;
use crate::layout::LayoutRules;
use crate::scroll::Speed;
use crate::sync::LookupFallback;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "guidenav.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Reader preferences loaded from guidenav.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 800.0)]
    /// Viewport widths strictly above this many pixels use the wide layout.
    pub threshold: f64,
    #[facet(default = 0.25)]
    /// Share of the viewport width given to the sidebar in wide layout.
    pub sidebar_fraction: f64,
    #[facet(default = 200.0)]
    /// Minimum sidebar width in wide layout.
    pub sidebar_min_width: f64,
    #[facet(default = 20.0)]
    /// Space between the sidebar and the main content in wide layout.
    pub gutter: f64,
    #[facet(default = 48.0)]
    /// Height of the fixed top navigation bar in narrow layout.
    pub top_bar_height: f64,
    #[facet(default = "fast".to_string())]
    /// Animated scroll speed, `fast` or `slow`.
    pub scroll_speed: String,
    #[facet(default = "ancestor".to_string())]
    /// What to highlight when a heading has no menu entry: `ancestor` or `ignore`.
    pub lookup_fallback: String,
    #[facet(default = 8.0)]
    /// Width of one terminal column in pixels.
    pub cell_width: f64,
    #[facet(default = 16.0)]
    /// Height of one line of text in pixels.
    pub line_height: f64,
    #[facet(default = 32.0)]
    /// Height of a heading title block in pixels.
    pub title_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 800.0,
            sidebar_fraction: 0.25,
            sidebar_min_width: 200.0,
            gutter: 20.0,
            top_bar_height: 48.0,
            scroll_speed: "fast".to_string(),
            lookup_fallback: "ancestor".to_string(),
            cell_width: 8.0,
            line_height: 16.0,
            title_height: 32.0,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `path`, or from guidenav.toml if no path is given.
    ///
    /// A missing guidenav.toml silently yields the defaults. An unreadable file that
    /// was asked for explicitly, or a malformed one, is logged and also yields the
    /// defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let explicit = path.is_some();
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }),
            Err(e) if explicit || e.kind() != io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                Self::default()
            }
            Err(_) => Self::default(),
        }
    }

    /// Parse configuration from TOML text, defaulting absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if the TOML does not deserialise, and
    /// [`ConfigError::UnknownValue`] if `scroll_speed` or `lookup_fallback` is not
    /// one of its known values.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config = facet_toml::from_str::<Self>(contents)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.scroll_speed.parse::<Speed>()?;
        config.lookup_fallback.parse::<LookupFallback>()?;
        Ok(config)
    }

    #[must_use]
    /// Layout rules derived from the sizing settings.
    pub fn layout_rules(&self) -> LayoutRules {
        LayoutRules {
            threshold: self.threshold,
            sidebar_fraction: self.sidebar_fraction,
            sidebar_min_width: self.sidebar_min_width,
            gutter: self.gutter,
            top_bar_height: self.top_bar_height,
        }
    }

    #[must_use]
    /// Animated scroll speed, falling back to fast for unknown values.
    pub fn speed(&self) -> Speed {
        self.scroll_speed.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using fast scroll speed");
            Speed::Fast
        })
    }

    #[must_use]
    /// Lookup fallback policy, falling back to ancestor for unknown values.
    pub fn fallback(&self) -> LookupFallback {
        self.lookup_fallback.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using ancestor lookup fallback");
            LookupFallback::Ancestor
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
