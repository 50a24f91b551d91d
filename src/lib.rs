//! guidenav: collapsible table-of-contents navigation for single-page user guides.
//!
//! The guide's headings are extracted with tree-sitter, turned into a nested
//! menu, and kept in step with the scroll position. Layout adapts between a
//! wide sidebar and a narrow top bar, and link clicks animate the page to their
//! target heading.

pub mod config;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod guide;
pub mod heading;
pub mod input;
pub mod layout;
pub mod menu;
pub mod scroll;
pub mod sync;
pub mod ui;
pub mod waypoint;
