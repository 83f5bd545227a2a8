use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/noteboard/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("noteboard").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(
            path = %path.display(),
            notes = config.notes.len(),
            groceries = config.groceries.len(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Validates the seed data.
    ///
    /// Checks:
    /// - Note ids are positive, unique, and below `u32::MAX`
    /// - Grocery item names are non-empty and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for note in &self.notes {
            if note.id.0 == 0 {
                return Err(ConfigError::ValidationError {
                    message: "Note ids must be positive".to_string(),
                });
            }
            if note.id.0 == u32::MAX {
                return Err(ConfigError::ValidationError {
                    message: format!("Note id {} leaves no room for new notes", note.id),
                });
            }
            if !ids.insert(note.id) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate note id {}", note.id),
                });
            }
        }

        let mut names = HashSet::new();
        for item in &self.groceries {
            if item.name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Grocery item names must not be empty".to_string(),
                });
            }
            if !names.insert(item.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate grocery item '{}'", item.name),
                });
            }
        }

        Ok(())
    }
}
