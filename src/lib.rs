//! Markr - a bookmark search engine over locally installed browsers
//!
//! This library locates the bookmark stores of Firefox-family and
//! Chromium-family browsers on disk, runs ranked substring queries against
//! them, and merges the matches under one result budget.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod browsers;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod output;
pub mod sources;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MarkrError {
    /// A bookmark source failed
    #[error("Source error: {0}")]
    SourceError(#[from] sources::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Results could not be serialized for output
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One search result as handed back to the caller.
///
/// `description` carries the target URL for display; `url` is what gets
/// opened when the result is activated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResultItem {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl ResultItem {
    /// Create a new `ResultItem`
    #[must_use]
    pub const fn new(icon: String, title: String, description: String, url: String) -> Self {
        Self {
            icon,
            title,
            description,
            url,
        }
    }
}
