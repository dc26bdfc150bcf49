//! Chromium-family bookmark source
//!
//! Chromium and its derivatives keep bookmarks as a JSON document with three
//! named roots (`bookmark_bar`, `synced`, `other`), each holding a tree of
//! folder and url nodes. The source re-reads the files on every query, so
//! results always reflect the store as it is on disk and nothing needs to be
//! held open between queries.
//!
//! Query text is split on whitespace and every sub-term must occur in a
//! bookmark's title, case-insensitively. Matches come back in tree order;
//! the format has no modification stamps worth ranking by.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::{BookmarkEntry, BookmarkSource, SourceError};
use crate::discovery;

/// Top level of a Chromium `Bookmarks` file
#[derive(Debug, Deserialize)]
struct BookmarkFile {
    roots: Roots,
}

/// The three standard bookmark roots. A file missing any of them does not
/// follow the format and is skipped whole.
#[derive(Debug, Deserialize)]
struct Roots {
    bookmark_bar: Node,
    synced: Node,
    other: Node,
}

/// One node of the bookmark tree
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Node {
    Folder {
        #[serde(default)]
        children: Vec<Node>,
    },
    Url {
        #[serde(default)]
        name: String,
        url: String,
    },
}

/// Match accumulator with a hard capacity.
///
/// Handed down through the folder recursion so the walk can stop as soon as
/// the budget is reached, instead of collecting everything and cutting
/// afterwards.
struct MatchCollector {
    entries: Vec<BookmarkEntry>,
    capacity: usize,
}

impl MatchCollector {
    fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    fn push(&mut self, entry: BookmarkEntry) {
        if !self.is_full() {
            self.entries.push(entry);
        }
    }

    fn into_entries(self) -> Vec<BookmarkEntry> {
        self.entries
    }
}

/// Bookmark source over the `Bookmarks` files of one Chromium-family browser
pub struct ChromiumSource {
    files: Vec<PathBuf>,
    active: bool,
    max_matches: usize,
}

impl ChromiumSource {
    /// Attach to every `Bookmarks` file under `root`.
    ///
    /// A root without bookmark files yields a source that matches nothing.
    #[must_use]
    pub fn open(root: &Path, max_matches: usize) -> Self {
        let files = discovery::chromium_bookmark_files(root);
        debug!(root = %root.display(), count = files.len(), "attached chromium bookmark files");

        Self {
            files,
            active: true,
            max_matches,
        }
    }
}

impl BookmarkSource for ChromiumSource {
    fn query(&mut self, text: &str) -> Result<Vec<BookmarkEntry>, SourceError> {
        let terms: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

        let mut collector = MatchCollector::new(self.max_matches);
        for path in &self.files {
            if collector.is_full() {
                break;
            }
            // One unreadable file must not take the others down with it.
            if let Err(err) = search_file(path, &terms, &mut collector) {
                warn!(file = %path.display(), error = %err, "skipping bookmark file");
            }
        }

        Ok(collector.into_entries())
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn close(&mut self) {
        // Nothing is held open between queries.
    }
}

/// Search one bookmark file, feeding matches into the collector
fn search_file(
    path: &Path,
    terms: &[String],
    collector: &mut MatchCollector,
) -> Result<(), SourceError> {
    let raw = fs::read_to_string(path)?;
    let file: BookmarkFile = serde_json::from_str(&raw)?;

    for root in [
        &file.roots.bookmark_bar,
        &file.roots.synced,
        &file.roots.other,
    ] {
        collect_matches(root, terms, collector);
    }
    Ok(())
}

/// Depth-first walk in stored order, stopping once the collector is full
fn collect_matches(node: &Node, terms: &[String], collector: &mut MatchCollector) {
    if collector.is_full() {
        return;
    }

    match node {
        Node::Url { name, url } => {
            if matches_all_terms(name, terms) {
                collector.push(BookmarkEntry::new(name.clone(), url.clone(), None));
            }
        }
        Node::Folder { children } => {
            for child in children {
                if collector.is_full() {
                    break;
                }
                collect_matches(child, terms, collector);
            }
        }
    }
}

/// True when every term occurs in the title, ignoring case
fn matches_all_terms(title: &str, terms: &[String]) -> bool {
    let haystack = title.to_lowercase();
    terms.iter().all(|term| haystack.contains(term))
}
