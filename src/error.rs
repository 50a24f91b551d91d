//! Errors raised while loading a guide.
//!
//! Navigation itself never fails: lookups that find nothing are no-ops. Only
//! reading and parsing the guide source can go wrong.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure to turn a guide source into navigable headings.
pub enum Error {
    /// Reading the guide from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The heading query did not compile against the grammar.
    #[error("invalid heading query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// The parser returned no syntax tree.
    #[error("failed to parse {0}")]
    Parse(String),
    /// The guide has no major heading to build a menu from.
    #[error("no major headings found in {}", .0.display())]
    NoHeadings(PathBuf),
    /// Serialising the menu failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for guide loading.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
/// Rejected configuration.
pub enum ConfigError {
    /// The TOML text did not deserialise.
    #[error("malformed config: {0}")]
    Malformed(String),
    /// A setting named a value outside its allowed set.
    #[error("unknown {setting}: {value:?}")]
    UnknownValue {
        /// Name of the setting.
        setting: &'static str,
        /// Value that was given.
        value: String,
    },
}
