//! Locating bookmark stores on disk
//!
//! Firefox-family browsers keep a `places.sqlite` database inside a profile
//! directory that `profiles.ini` points at. Chromium-family browsers keep one
//! JSON file literally named `Bookmarks` per profile directory, at varying
//! depths under the config root. Both lookups degrade to "nothing found"
//! rather than failing; a browser that is not installed is the common case.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use glob::Pattern;
use tracing::{debug, warn};

/// Database filename inside a Firefox profile directory
const PLACES_DB: &str = "places.sqlite";

/// Filename Chromium-family browsers use for their bookmark tree
const BOOKMARKS_FILE: &str = "Bookmarks";

/// Sections of this kind name the active profile directly
const INSTALL_SECTION_PREFIX: &str = "install";

/// Parsed `profiles.ini`: section name to key/value entries.
///
/// Section and key names are compared case-insensitively; the map is ordered
/// so section scans are deterministic.
type IniSections = BTreeMap<String, BTreeMap<String, String>>;

/// Resolve the `places.sqlite` path for a Firefox-family config root.
///
/// Reads `<root>/profiles.ini` and selects the active profile:
/// 1. an `[Install...]` section's `Default` entry names the profile directly,
/// 2. otherwise the first profile section flagged `Default=1` supplies its `Path`,
/// 3. otherwise `[Profile0]`'s `Path` is used.
///
/// Returns `None` when the root, the ini file, or a usable profile entry is
/// missing. The profile path from the ini file may be absolute, in which case
/// it replaces the root on join.
#[must_use]
pub fn firefox_store_path(root: &Path) -> Option<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "firefox config root not present");
        return None;
    }

    let ini_path = root.join("profiles.ini");
    if !ini_path.is_file() {
        debug!(root = %root.display(), "no profiles.ini under config root");
        return None;
    }

    let sections = match read_ini_sections(&ini_path) {
        Ok(sections) => sections,
        Err(err) => {
            warn!(file = %ini_path.display(), error = %err, "could not parse profiles.ini");
            return None;
        }
    };

    let profile = select_profile(&sections)?;
    let store = root.join(profile).join(PLACES_DB);
    debug!(store = %store.display(), "resolved firefox bookmark store");
    Some(store)
}

/// Parse an ini file into ordered sections
fn read_ini_sections(path: &Path) -> Result<IniSections, ConfigError> {
    let settings = Config::builder()
        .add_source(File::from(path.to_path_buf()).format(FileFormat::Ini))
        .build()?;
    settings.try_deserialize()
}

/// Apply the profile selection rules to the parsed sections
fn select_profile(sections: &IniSections) -> Option<String> {
    // An install section pins the active profile by path.
    for (name, entries) in sections {
        if name.to_ascii_lowercase().starts_with(INSTALL_SECTION_PREFIX)
            && let Some(path) = section_value(entries, "default")
        {
            return Some(path.clone());
        }
    }

    // Otherwise the first profile marked as the default.
    for entries in sections.values() {
        if section_value(entries, "default").is_some_and(|flag| flag == "1")
            && let Some(path) = section_value(entries, "path")
        {
            return Some(path.clone());
        }
    }

    // Otherwise the first listed profile.
    sections.iter().find_map(|(name, entries)| {
        if name.eq_ignore_ascii_case("profile0") {
            section_value(entries, "path").cloned()
        } else {
            None
        }
    })
}

/// Case-insensitive key lookup within one ini section
fn section_value<'a>(entries: &'a BTreeMap<String, String>, key: &str) -> Option<&'a String> {
    entries
        .iter()
        .find_map(|(name, value)| name.eq_ignore_ascii_case(key).then_some(value))
}

/// Find every `Bookmarks` file under a Chromium-family config root.
///
/// Browsers of this family keep one bookmark tree per profile directory
/// (`Default`, `Profile 1`, ...), so the scan is recursive. Results are
/// sorted for a stable query order.
#[must_use]
pub fn chromium_bookmark_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "chromium config root not present");
        return Vec::new();
    }

    let Some(root_str) = root.to_str() else {
        warn!(root = %root.display(), "config root is not valid UTF-8, skipping scan");
        return Vec::new();
    };

    let pattern = format!("{}/**/{BOOKMARKS_FILE}", Pattern::escape(root_str));
    let entries = match glob::glob(&pattern) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(root = %root.display(), error = %err, "bookmark scan pattern rejected");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    debug!(root = %root.display(), count = files.len(), "located chromium bookmark files");
    files
}
