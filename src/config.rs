//! Configuration module for markr
//!
//! Manages application configuration: which browsers are searched and how
//! many results one search may return. Configuration is stored in the
//! user's config directory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Result budget applied when the config file does not set one
pub const DEFAULT_MAX_MATCHES: usize = 10;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarkrConfig {
    /// Per-browser enable flags, keyed by browser key. Browsers without an
    /// entry count as enabled.
    #[serde(default)]
    pub sources: HashMap<String, bool>,

    /// Upper bound on results returned by one search
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
}

fn default_max_matches() -> usize {
    DEFAULT_MAX_MATCHES
}

impl Default for MarkrConfig {
    fn default() -> Self {
        Self {
            sources: HashMap::new(),
            max_matches: DEFAULT_MAX_MATCHES,
        }
    }
}

impl MarkrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        let markr_config_dir = config_dir.join("markr");
        Ok(markr_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Whether the source with this key should start enabled
    #[must_use]
    pub fn source_enabled(&self, key: &str) -> bool {
        self.sources.get(key).copied().unwrap_or(true)
    }

    /// Persist an enable flag for one source
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn set_source_enabled(&mut self, key: String, enabled: bool) -> Result<(), ConfigError> {
        self.sources.insert(key, enabled);
        self.save()
    }
}
