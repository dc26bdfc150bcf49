//! Source-specific error types
//!
//! This module defines the error types that can occur while opening or
//! querying a browser's bookmark store. The engine consumes these errors
//! internally; a failing source is logged and contributes no results.
//!
//! # Error Types
//!
//! - **`SqliteError`**: Errors from the places database (wraps `rusqlite::Error`)
//! - **`IoError`**: A bookmark store could not be read from disk
//! - **`MalformedData`**: A bookmark file held something other than the expected JSON tree
//!
//! All errors implement `std::error::Error` via the `thiserror` crate and provide
//! helpful error messages for debugging.

use thiserror::Error;

/// Source-specific errors
#[derive(Debug, Error)]
pub enum SourceError {
    /// Represents a SQLite error from the places database
    #[error("Database error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// Represents an I/O error while reading a bookmark store
    #[error("Error while reading bookmark store: {0}")]
    IoError(#[from] std::io::Error),

    /// Bookmark file contents did not match the expected JSON tree
    #[error("Malformed bookmark data: {0}")]
    MalformedData(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
