//! Firefox-family bookmark source
//!
//! Bookmarks live in the `places.sqlite` database of the active profile,
//! split across two tables: `moz_bookmarks` holds titles and the folder
//! hierarchy, `moz_places` holds the URLs. A running browser keeps the live
//! database locked, so the source copies it to a scratch file and opens the
//! copy read-only. Queries filter and rank inside SQL so only the rows that
//! will actually be shown ever cross into Rust.
//!
//! A bookmark's full title is its folder title joined with `/`, except for
//! bookmarks sitting directly on the toolbar, which keep their bare title.
//! Matches are ordered by where the query text occurs in the full title,
//! earliest first, with recently modified bookmarks breaking ties.

use std::fs;
use std::path::Path;

use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags, params};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{BookmarkEntry, BookmarkSource, SourceError};
use crate::discovery;

/// Substring filter with position-then-recency ranking.
///
/// `?1` is the LIKE pattern, `?2` the raw query text, `?3` the row limit.
/// The self join resolves each bookmark's folder; folders are type 2 rows.
const RANKED_SQL: &str = r"
SELECT b.title, p.url,
       CASE WHEN parent.title = 'toolbar' THEN NULL ELSE parent.title END AS folder,
       CASE WHEN parent.title = 'toolbar' THEN b.title
            ELSE COALESCE(parent.title || '/', '') || b.title
       END AS full_title
  FROM moz_bookmarks AS b
  LEFT JOIN moz_bookmarks AS parent ON b.parent = parent.id AND parent.type = 2
  JOIN moz_places AS p ON b.fk = p.id
 WHERE full_title LIKE ?1 ESCAPE '\'
 ORDER BY instr(lower(full_title), lower(?2)) ASC, b.lastModified DESC
 LIMIT ?3";

/// Listing for empty query text: most recently modified bookmarks first
const RECENT_SQL: &str = r"
SELECT b.title, p.url,
       CASE WHEN parent.title = 'toolbar' THEN NULL ELSE parent.title END AS folder,
       CASE WHEN parent.title = 'toolbar' THEN b.title
            ELSE COALESCE(parent.title || '/', '') || b.title
       END AS full_title
  FROM moz_bookmarks AS b
  LEFT JOIN moz_bookmarks AS parent ON b.parent = parent.id AND parent.type = 2
  JOIN moz_places AS p ON b.fk = p.id
 WHERE full_title IS NOT NULL
 ORDER BY b.lastModified DESC
 LIMIT ?1";

/// Bookmark source backed by a snapshot of the places database
pub struct FirefoxSource {
    store: Option<Snapshot>,
    active: bool,
    max_matches: usize,
}

/// An open, read-only copy of the places database.
///
/// The scratch file outlives the connection; field order keeps the
/// connection closed before the file is removed.
struct Snapshot {
    conn: Connection,
    _scratch: NamedTempFile,
}

impl FirefoxSource {
    /// Open a snapshot of the places database under `root`.
    ///
    /// When the store cannot be located, copied, or opened, the source stays
    /// usable and simply matches nothing. The failure is logged; it never
    /// propagates.
    #[must_use]
    pub fn open(root: &Path, max_matches: usize) -> Self {
        let store = match Snapshot::open(root) {
            Ok(Some(snapshot)) => Some(snapshot),
            Ok(None) => {
                debug!(root = %root.display(), "no places database found");
                None
            }
            Err(err) => {
                warn!(root = %root.display(), error = %err, "places database unavailable");
                None
            }
        };

        Self {
            store,
            active: true,
            max_matches,
        }
    }
}

impl BookmarkSource for FirefoxSource {
    fn query(&mut self, text: &str) -> Result<Vec<BookmarkEntry>, SourceError> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };

        let limit = self.max_matches as i64;
        let entries = if text.is_empty() {
            let mut stmt = store.conn.prepare(RECENT_SQL)?;
            let rows = stmt.query_map(params![limit], row_to_entry)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        } else {
            let mut stmt = store.conn.prepare(RANKED_SQL)?;
            let rows = stmt.query_map(params![like_pattern(text), text, limit], row_to_entry)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        Ok(entries)
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn close(&mut self) {
        self.store = None;
    }
}

impl Snapshot {
    /// Locate, copy, and open the places database for a config root.
    ///
    /// Returns `Ok(None)` when no store exists under the root.
    fn open(root: &Path) -> Result<Option<Self>, SourceError> {
        let Some(db_path) = discovery::firefox_store_path(root) else {
            return Ok(None);
        };
        if !db_path.is_file() {
            return Ok(None);
        }

        let scratch = NamedTempFile::new()?;
        fs::copy(&db_path, scratch.path())?;

        let conn = Connection::open_with_flags(scratch.path(), OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        register_hostname(&conn)?;
        debug!(store = %db_path.display(), "opened places snapshot");

        Ok(Some(Self {
            conn,
            _scratch: scratch,
        }))
    }
}

/// Map one result row onto a `BookmarkEntry`
fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookmarkEntry> {
    Ok(BookmarkEntry {
        title: row.get(0)?,
        url: row.get(1)?,
        folder: row.get(2)?,
    })
}

/// Build a LIKE pattern that matches the query text as a literal substring
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Register the `hostname(url)` helper on a places connection.
///
/// Returns the text between the second and third slash of the URL, or
/// `Unknown` when the URL has no such segment.
fn register_hostname(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "hostname",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let url = ctx.get::<String>(0)?;
            Ok(hostname(&url))
        },
    )
}

fn hostname(url: &str) -> String {
    url.split('/')
        .nth(2)
        .map_or_else(|| "Unknown".to_string(), str::to_string)
}
