//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for markr using the `clap` crate.
//! It provides command parsing, argument validation, and helper methods for extracting
//! command-specific data.
//!
//! # Commands
//!
//! - **search**: Query bookmarks across enabled browsers (default)
//! - **sources**: List supported browsers and their enablement state
//! - **enable / disable**: Persist per-browser enablement
//!
//! # Design Features
//!
//! - Bare words are the query: `markr rust book` searches for "rust book"
//! - Global `--quiet` flag for scripting-friendly output (URLs only)
//! - Command aliases (e.g., `s` for `search`)
//! - `--json` output for driving other tools
//!
//! # Examples
//!
//! ```
//! use markr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! let command = cli.get_command();
//!
//! match command {
//!     Commands::Search { .. } => {
//!         let text = command.get_query_text();
//!     }
//!     _ => {}
//! }
//! ```

use clap::{Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "markr")]
#[command(about = "Search bookmarks across locally installed browsers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print activation URLs)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search bookmarks across enabled browsers (default)
    #[command(visible_alias = "s")]
    Search {
        /// Query words; every word must appear in a bookmark title
        #[arg(value_name = "QUERY")]
        query: Vec<String>,

        /// Maximum number of results to return (overrides config)
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,

        /// Open the first result in the default handler
        #[arg(short = 'o', long = "open")]
        open: bool,
    },

    /// List supported browsers and whether they are enabled
    Sources,

    /// Enable bookmark searching for a browser
    Enable {
        /// Browser key (see `markr sources`)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Disable bookmark searching for a browser
    Disable {
        /// Browser key (see `markr sources`)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Commands {
    /// Helper method to join the search words into one query string
    #[must_use]
    pub fn get_query_text(&self) -> String {
        match self {
            Self::Search { query, .. } => query.join(" "),
            _ => String::new(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Search if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Search {
            query: Vec::new(),
            limit: None,
            json: false,
            open: false,
        })
    }
}
