//! Testing utilities for markr
//!
//! This module provides fixture builders for browser bookmark stores: a
//! Firefox-style config root with a seeded places database, and a
//! Chromium-style config root holding `Bookmarks` JSON files. Both clean up
//! their temporary trees on drop.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rusqlite::{Connection, params};
use serde_json::{Value, json};
use tempfile::TempDir;

/// One bookmark to seed into a fixture places database
#[derive(Debug, Clone, Copy)]
pub struct FixtureBookmark {
    pub title: &'static str,
    pub url: &'static str,
    /// Folder the bookmark sits in; `Some("toolbar")` puts it on the toolbar
    pub folder: Option<&'static str>,
    pub last_modified: i64,
}

/// A Firefox-family config root with one default profile.
///
/// The tree matches what discovery expects: a `profiles.ini` naming the
/// profile and a `places.sqlite` inside it holding the given bookmarks.
///
/// # Examples
/// ```
/// # use markr::testing::{FirefoxRoot, FixtureBookmark};
/// let root = FirefoxRoot::new(&[FixtureBookmark {
///     title: "Docs",
///     url: "https://docs.example.com",
///     folder: Some("Work"),
///     last_modified: 1,
/// }]);
/// assert!(root.path().join("profiles.ini").is_file());
/// // Tree automatically cleaned up when root is dropped
/// ```
pub struct FirefoxRoot {
    dir: TempDir,
}

impl FirefoxRoot {
    const PROFILE: &'static str = "abcd.test-default";

    /// Build a config root whose places database holds the given bookmarks
    ///
    /// # Panics
    /// Panics if the fixture tree or database cannot be written.
    pub fn new(bookmarks: &[FixtureBookmark]) -> Self {
        let dir = TempDir::new().expect("Failed to create fixture directory");

        fs::write(
            dir.path().join("profiles.ini"),
            format!(
                "[Profile0]\nName=default\nIsRelative=1\nPath={}\nDefault=1\n",
                Self::PROFILE
            ),
        )
        .expect("Failed to write profiles.ini");

        let profile_dir = dir.path().join(Self::PROFILE);
        fs::create_dir_all(&profile_dir).expect("Failed to create profile directory");

        let conn = Connection::open(profile_dir.join("places.sqlite"))
            .expect("Failed to create places database");
        seed_places(&conn, bookmarks).expect("Failed to seed places database");

        Self { dir }
    }

    /// Config root path, the directory holding `profiles.ini`
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Create the slice of the places schema the queries touch and fill it.
///
/// Folders become type 2 rows without a place; bookmarks become type 1 rows
/// joined to their place via `fk`. Folderless bookmarks get parent 0, which
/// no row carries, so the folder join yields NULL for them.
fn seed_places(conn: &Connection, bookmarks: &[FixtureBookmark]) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE moz_places (
             id INTEGER PRIMARY KEY,
             url TEXT NOT NULL
         );
         CREATE TABLE moz_bookmarks (
             id INTEGER PRIMARY KEY,
             type INTEGER NOT NULL,
             fk INTEGER,
             parent INTEGER,
             title TEXT,
             lastModified INTEGER NOT NULL DEFAULT 0
         );",
    )?;

    let mut folder_ids: HashMap<&str, i64> = HashMap::new();

    for bookmark in bookmarks {
        let parent = match bookmark.folder {
            Some(folder) => match folder_ids.get(folder) {
                Some(id) => *id,
                None => {
                    conn.execute(
                        "INSERT INTO moz_bookmarks (type, parent, title) VALUES (2, 0, ?1)",
                        params![folder],
                    )?;
                    let id = conn.last_insert_rowid();
                    folder_ids.insert(folder, id);
                    id
                }
            },
            None => 0,
        };

        conn.execute(
            "INSERT INTO moz_places (url) VALUES (?1)",
            params![bookmark.url],
        )?;
        let place_id = conn.last_insert_rowid();

        conn.execute(
            "INSERT INTO moz_bookmarks (type, fk, parent, title, lastModified)
             VALUES (1, ?1, ?2, ?3, ?4)",
            params![place_id, parent, bookmark.title, bookmark.last_modified],
        )?;
    }

    Ok(())
}

/// A Chromium-family config root with one `Bookmarks` file per profile
///
/// # Examples
/// ```
/// # use markr::testing::{ChromiumRoot, bookmarks_file, url_node};
/// let root = ChromiumRoot::new();
/// root.write(
///     "Default",
///     &bookmarks_file(vec![url_node("Docs", "https://docs.example.com")], vec![], vec![]),
/// );
/// ```
pub struct ChromiumRoot {
    dir: TempDir,
}

impl ChromiumRoot {
    /// Create an empty config root
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create fixture directory");
        Self { dir }
    }

    /// Config root path, the directory profiles are created under
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a profile's `Bookmarks` file from a JSON value
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, profile: &str, contents: &Value) {
        let rendered = serde_json::to_string_pretty(contents).expect("Failed to render bookmarks");
        self.write_raw(profile, &rendered);
    }

    /// Write a profile's `Bookmarks` file verbatim, malformed content included
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, profile: &str, contents: &str) {
        let profile_dir = self.dir.path().join(profile);
        fs::create_dir_all(&profile_dir).expect("Failed to create profile directory");
        fs::write(profile_dir.join("Bookmarks"), contents).expect("Failed to write Bookmarks");
    }
}

impl Default for ChromiumRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete `Bookmarks` document with the three standard roots
#[must_use]
pub fn bookmarks_file(bar: Vec<Value>, synced: Vec<Value>, other: Vec<Value>) -> Value {
    json!({
        "roots": {
            "bookmark_bar": {"type": "folder", "name": "Bookmarks bar", "children": bar},
            "synced": {"type": "folder", "name": "Mobile bookmarks", "children": synced},
            "other": {"type": "folder", "name": "Other bookmarks", "children": other},
        },
        "version": 1,
    })
}

/// A url node of a bookmark tree
#[must_use]
pub fn url_node(name: &str, url: &str) -> Value {
    json!({"type": "url", "name": name, "url": url})
}

/// A folder node with the given children
#[must_use]
pub fn folder_node(name: &str, children: Vec<Value>) -> Value {
    json!({"type": "folder", "name": name, "children": children})
}
