//! Output formatting for CLI display
//!
//! This module provides utilities for formatting search results and the
//! source listing for the CLI.

use crate::ResultItem;
use crate::browsers::BrowserProfile;
use colored::Colorize;

/// Format a search result for display
#[must_use]
pub fn result_line(item: &ResultItem, quiet: bool) -> String {
    if quiet {
        item.url.clone()
    } else {
        format!("  {}  {}", item.title.bold(), item.description.blue())
    }
}

/// Format a source listing row with its enablement state
#[must_use]
pub fn source_line(profile: &BrowserProfile, enabled: bool) -> String {
    let state = if enabled {
        "enabled".green()
    } else {
        "disabled".red()
    };
    format!(
        "  {:<14} {:<16} {:<9} {}",
        profile.key,
        profile.name,
        profile.kind.to_string(),
        state
    )
}
