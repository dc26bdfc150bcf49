//! Supported browser registry
//!
//! Static descriptions of every browser the engine knows how to read:
//! where its bookmark store lives relative to the home directory, which
//! storage family it belongs to, and which icon its results carry.

use std::fmt;
use std::path::PathBuf;

/// Bookmark storage family a browser belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    /// SQLite places database inside a profile directory
    Firefox,
    /// JSON bookmark tree files under the config directory
    Chromium,
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Firefox => write!(f, "firefox"),
            Self::Chromium => write!(f, "chromium"),
        }
    }
}

/// Static description of one supported browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserProfile {
    /// Stable identifier used in configuration and preference updates
    pub key: &'static str,
    /// Human readable name
    pub name: &'static str,
    /// Bookmark storage root, relative to the home directory
    pub storage_root: &'static str,
    /// Icon key attached to results from this browser
    pub icon: &'static str,
    /// Storage family
    pub kind: BrowserKind,
}

impl BrowserProfile {
    /// Resolve the storage root against the user's home directory.
    ///
    /// Returns `None` when the home directory cannot be determined.
    #[must_use]
    pub fn storage_path(&self) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(self.storage_root))
    }
}

/// Every browser the engine can read, in the order sources are queried
pub static SUPPORTED: [BrowserProfile; 5] = [
    BrowserProfile {
        key: "google-chrome",
        name: "Google Chrome",
        storage_root: ".config/google-chrome",
        icon: "chrome",
        kind: BrowserKind::Chromium,
    },
    BrowserProfile {
        key: "chromium",
        name: "Chromium",
        storage_root: ".config/chromium",
        icon: "chromium",
        kind: BrowserKind::Chromium,
    },
    BrowserProfile {
        key: "brave",
        name: "Brave",
        storage_root: ".config/BraveSoftware",
        icon: "brave",
        kind: BrowserKind::Chromium,
    },
    BrowserProfile {
        key: "firefox",
        name: "Firefox",
        storage_root: ".mozilla/firefox",
        icon: "firefox",
        kind: BrowserKind::Firefox,
    },
    BrowserProfile {
        key: "firefox-snap",
        name: "Firefox (Snap)",
        storage_root: "snap/firefox/common/.mozilla/firefox",
        icon: "firefox",
        kind: BrowserKind::Firefox,
    },
];

/// Look up a supported browser by key
#[must_use]
pub fn find(key: &str) -> Option<&'static BrowserProfile> {
    SUPPORTED.iter().find(|profile| profile.key == key)
}
