//! Markr CLI application entry point
//!
//! This is the main executable for the markr bookmark search tool. It queries
//! the bookmark stores of locally installed browsers and prints the merged,
//! ranked matches.
//!
//! # Features
//!
//! - **Multi-browser**: Reads Firefox-family places databases and
//!   Chromium-family bookmark files through one interface
//! - **Ranked matching**: Earlier title matches first, recency as tiebreak
//! - **Source Management**: Enable or disable individual browsers
//! - **JSON Output**: Feed results into other tools
//! - **Quiet Mode**: Print activation URLs only, for scripting
//!
//! # Usage
//!
//! ```bash
//! # Search all enabled browsers (default command)
//! markr rust book
//! markr search rust book
//!
//! # List the ten most recently modified bookmarks
//! markr search
//!
//! # Open the best match directly
//! markr search -o rust book
//!
//! # See which browsers are searched
//! markr sources
//!
//! # Stop searching a browser's bookmarks
//! markr disable brave
//!
//! # Quiet mode (only output URLs)
//! markr -q search rust
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/markr/config.toml` on Linux): per-browser enable flags and
//! the result budget.

use markr::{
    MarkrError,
    browsers,
    cli::{Cli, Commands},
    config::MarkrConfig,
    engine::QueryEngine,
    output,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, MarkrError>;

/// Build the engine from configuration and apply per-source preferences
fn build_engine(config: &MarkrConfig, limit: Option<usize>) -> QueryEngine {
    let max_matches = limit.unwrap_or(config.max_matches);
    let mut engine = QueryEngine::with_installed_browsers(max_matches);
    for profile in &browsers::SUPPORTED {
        engine.set_active(profile.key, config.source_enabled(profile.key));
    }
    engine
}

/// Handle the search command - query all enabled browsers and print results
///
/// # Arguments
/// * `config` - Application configuration
/// * `text` - Query text, possibly empty
/// * `limit` - Per-run override of the result budget
/// * `json` - Print results as JSON instead of formatted lines
/// * `open_first` - Open the first result's URL after printing
/// * `quiet` - If true, suppress informational output
///
/// # Errors
///
/// Returns `MarkrError` if serializing results or opening a URL fails.
/// Source failures never surface here; they are logged and skipped.
fn handle_search_command(
    config: &MarkrConfig,
    text: &str,
    limit: Option<usize>,
    json: bool,
    open_first: bool,
    quiet: bool,
) -> Result<()> {
    let mut engine = build_engine(config, limit);
    let results = engine.search(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        if !quiet {
            println!("No bookmarks matched");
        }
    } else {
        if !quiet {
            println!("Found {} bookmark(s):", results.len());
        }
        for item in &results {
            println!("{}", output::result_line(item, quiet));
        }
    }

    if open_first && let Some(first) = results.first() {
        open::that(&first.url)?;
        if !quiet {
            println!("Opened {}", first.url);
        }
    }

    Ok(())
}

/// Handle the sources command - list supported browsers and their state
fn handle_sources_command(config: &MarkrConfig, quiet: bool) {
    if !quiet {
        println!("Supported browsers:");
    }
    for profile in &browsers::SUPPORTED {
        let enabled = config.source_enabled(profile.key);
        if quiet {
            if enabled {
                println!("{}", profile.key);
            }
        } else {
            println!("{}", output::source_line(profile, enabled));
        }
    }
}

/// Handle the enable/disable commands - persist one browser's enablement
///
/// # Errors
///
/// Returns `MarkrError` if the key is unknown or the configuration cannot
/// be saved.
fn handle_toggle_command(mut config: MarkrConfig, key: &str, enabled: bool, quiet: bool) -> Result<()> {
    if browsers::find(key).is_none() {
        let known: Vec<&str> = browsers::SUPPORTED.iter().map(|profile| profile.key).collect();
        return Err(MarkrError::InvalidInput(format!(
            "Unknown browser '{key}'. Available keys: {}",
            known.join(", ")
        )));
    }

    config.set_source_enabled(key.to_string(), enabled)?;

    if !quiet {
        let action = if enabled { "Enabled" } else { "Disabled" };
        println!("{action} bookmark searching for '{key}'");
    }
    Ok(())
}

/// Main entry point for the markr application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `MarkrError` if configuration loading fails or a command handler
/// returns an error.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "markr=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = MarkrConfig::load()?;

    let cli = Cli::parse_args();
    let quiet = cli.quiet;
    let command = cli.get_command();

    match &command {
        Commands::Search {
            limit, json, open, ..
        } => {
            let text = command.get_query_text();
            handle_search_command(&config, &text, *limit, *json, *open, quiet)?;
        }
        Commands::Sources => handle_sources_command(&config, quiet),
        Commands::Enable { key } => handle_toggle_command(config, key, true, quiet)?,
        Commands::Disable { key } => handle_toggle_command(config, key, false, quiet)?,
    }

    Ok(())
}
