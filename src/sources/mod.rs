//! Bookmark sources
//!
//! One submodule per storage family plus the contract shared by both. A
//! source wraps a single browser's bookmark store and answers substring
//! queries against it. Sources degrade rather than fail: a store that
//! cannot be opened stays usable and simply matches nothing.

pub mod chromium;
pub mod error;
pub mod firefox;

pub use chromium::ChromiumSource;
pub use error::SourceError;
pub use firefox::FirefoxSource;

/// A single bookmark pulled out of a browser's store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    /// Bookmark title as stored by the browser
    pub title: String,
    /// Target URL
    pub url: String,
    /// Folder the bookmark lives in, when the store tracks one worth showing
    pub folder: Option<String>,
}

impl BookmarkEntry {
    /// Create a new `BookmarkEntry`
    #[must_use]
    pub const fn new(title: String, url: String, folder: Option<String>) -> Self {
        Self { title, url, folder }
    }

    /// Title for presentation, with the folder prefixed when one applies
    #[must_use]
    pub fn display_title(&self) -> String {
        match &self.folder {
            Some(folder) => format!("{folder}/{}", self.title),
            None => self.title.clone(),
        }
    }
}

/// Common contract for one browser's bookmark store
pub trait BookmarkSource {
    /// Run one query against the store.
    ///
    /// Matching is a case-insensitive substring test over bookmark titles;
    /// empty query text matches everything. Never returns more entries than
    /// the budget the source was opened with.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the underlying store rejects the query.
    fn query(&mut self, text: &str) -> Result<Vec<BookmarkEntry>, SourceError>;

    /// Toggle whether this source participates in searches
    fn set_active(&mut self, active: bool);

    /// Whether this source currently participates in searches
    fn is_active(&self) -> bool;

    /// Release any held storage. Safe to call more than once.
    fn close(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_with_folder() {
        let entry = BookmarkEntry::new(
            "Docs".to_string(),
            "https://docs.example.com".to_string(),
            Some("Work".to_string()),
        );
        assert_eq!(entry.display_title(), "Work/Docs");
    }

    #[test]
    fn test_display_title_without_folder() {
        let entry = BookmarkEntry::new(
            "Docs".to_string(),
            "https://docs.example.com".to_string(),
            None,
        );
        assert_eq!(entry.display_title(), "Docs");
    }
}
