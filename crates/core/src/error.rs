//! Error types for configuration, dictionary loading, and grid construction.
//!
//! Rejected selections are not errors; see [`crate::ConfirmOutcome`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dictionary json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dictionary has no words of length {min_len}-{max_len}")]
    Empty { min_len: usize, max_len: usize },

    #[error("dictionary loader stopped before finishing")]
    Disconnected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {expected} strips, got {got}")]
    StripCount { expected: usize, got: usize },

    #[error("strip {index} has {got} letters, expected {expected}")]
    StripLength {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("strip {index} contains non-letter {found:?}")]
    NotALetter { index: usize, found: char },

    #[error("grid size {grid_size} does not fit strip capacity {capacity}")]
    Geometry { grid_size: usize, capacity: usize },
}
