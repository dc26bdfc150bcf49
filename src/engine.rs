//! The bookmark query engine
//!
//! Owns one source per registered browser and fans each query out to the
//! active ones, in registration order. Per-source results are concatenated
//! as-is and the merged list cut to the engine's budget; sources already
//! rank internally and the formats' orderings are not comparable, so no
//! cross-source re-ranking is attempted.
//!
//! A failing source is logged and contributes nothing. `search` itself
//! never fails.

use std::path::Path;

use tracing::{debug, warn};

use crate::ResultItem;
use crate::browsers::{self, BrowserKind, BrowserProfile};
use crate::sources::{BookmarkSource, ChromiumSource, FirefoxSource};

/// One registered source with its registry entry
struct SourceSlot {
    profile: BrowserProfile,
    source: Box<dyn BookmarkSource>,
}

/// Multi-browser bookmark query engine
pub struct QueryEngine {
    slots: Vec<SourceSlot>,
    max_matches: usize,
    shut_down: bool,
}

impl QueryEngine {
    /// Engine with no sources attached; callers register their own
    #[must_use]
    pub const fn new(max_matches: usize) -> Self {
        Self {
            slots: Vec::new(),
            max_matches,
            shut_down: false,
        }
    }

    /// Build an engine with one source per supported browser, rooted in the
    /// user's home directory.
    ///
    /// Browsers that are not installed still get a slot; their sources
    /// simply never match anything.
    #[must_use]
    pub fn with_installed_browsers(max_matches: usize) -> Self {
        let mut engine = Self::new(max_matches);
        for profile in &browsers::SUPPORTED {
            match profile.storage_path() {
                Some(root) => {
                    engine.register(*profile, open_source(profile.kind, &root, max_matches));
                }
                None => warn!(browser = profile.key, "home directory unknown, source skipped"),
            }
        }
        engine
    }

    /// Attach a source under the given profile.
    ///
    /// Registration order is the order sources are queried in.
    pub fn register(&mut self, profile: BrowserProfile, source: Box<dyn BookmarkSource>) {
        self.slots.push(SourceSlot { profile, source });
    }

    /// Run one query across all active sources.
    ///
    /// Sources are queried in registration order and their matches
    /// concatenated, then cut to the engine's budget. A failing source
    /// contributes nothing; it never aborts the search.
    pub fn search(&mut self, text: &str) -> Vec<ResultItem> {
        let mut results: Vec<ResultItem> = Vec::new();

        for slot in &mut self.slots {
            if !slot.source.is_active() {
                continue;
            }
            match slot.source.query(text) {
                Ok(entries) => {
                    debug!(browser = slot.profile.key, count = entries.len(), "source answered");
                    results.extend(entries.into_iter().map(|entry| {
                        let title = entry.display_title();
                        ResultItem::new(
                            slot.profile.icon.to_string(),
                            title,
                            entry.url.clone(),
                            entry.url,
                        )
                    }));
                }
                Err(err) => {
                    warn!(browser = slot.profile.key, error = %err, "source query failed");
                }
            }
        }

        results.truncate(self.max_matches);
        results
    }

    /// Enable or disable one source by browser key.
    ///
    /// Takes effect for the next search. Returns `false` when no source
    /// with that key is registered.
    pub fn set_active(&mut self, key: &str, active: bool) -> bool {
        match self.slots.iter_mut().find(|slot| slot.profile.key == key) {
            Some(slot) => {
                slot.source.set_active(active);
                true
            }
            None => false,
        }
    }

    /// Registered sources with their current active flag, in query order
    #[must_use]
    pub fn sources(&self) -> Vec<(&BrowserProfile, bool)> {
        self.slots
            .iter()
            .map(|slot| (&slot.profile, slot.source.is_active()))
            .collect()
    }

    /// Result budget applied to every search
    #[must_use]
    pub const fn max_matches(&self) -> usize {
        self.max_matches
    }

    /// Close every source and deactivate it.
    ///
    /// Safe to call repeatedly; sources are closed once. Searches after
    /// shutdown return no results instead of failing.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        for slot in &mut self.slots {
            slot.source.close();
            slot.source.set_active(false);
        }
        self.shut_down = true;
    }
}

impl Drop for QueryEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Open the right source implementation for a browser kind
fn open_source(kind: BrowserKind, root: &Path, max_matches: usize) -> Box<dyn BookmarkSource> {
    match kind {
        BrowserKind::Firefox => Box::new(FirefoxSource::open(root, max_matches)),
        BrowserKind::Chromium => Box::new(ChromiumSource::open(root, max_matches)),
    }
}
