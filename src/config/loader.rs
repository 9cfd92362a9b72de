use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, ASSISTANT_API_KEY_ENV, IMAGES_ACCESS_KEY_ENV};

/// Largest page the gallery can show. Bigger pages would fetch results that
/// never reach the screen.
pub const MAX_PER_PAGE: u32 = 6;

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
    /// Uses `~/.config/taskdeck/config.toml` on Linux, or the equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("taskdeck").join("config.toml")
    }

    /// Default log file location, used when `[logging] file` is unset.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        cache_dir.join("taskdeck").join("taskdeck.log")
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file: defaults.
    /// - Otherwise: parse as TOML, fill keys from the environment, validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Config::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Fill missing credentials from the environment.
    ///
    /// Values present in the file win over the environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.assistant.api_key.is_none() {
            self.assistant.api_key = lookup(ASSISTANT_API_KEY_ENV).filter(|v| !v.is_empty());
        }
        if self.images.access_key.is_none() {
            self.images.access_key = lookup(IMAGES_ACCESS_KEY_ENV).filter(|v| !v.is_empty());
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both base URLs and the model name are non-empty
    /// - `per_page` is within 1..=`MAX_PER_PAGE`
    /// - `tick_rate_ms` is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assistant.base_url.trim().is_empty() {
            return Err(validation("assistant.base_url must not be empty"));
        }
        if self.assistant.model.trim().is_empty() {
            return Err(validation("assistant.model must not be empty"));
        }
        if self.images.base_url.trim().is_empty() {
            return Err(validation("images.base_url must not be empty"));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.images.per_page) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "images.per_page must be between 1 and {}, got {}",
                    MAX_PER_PAGE, self.images.per_page
                ),
            });
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(validation("ui.tick_rate_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Resolved log file path.
    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }
}

fn validation(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
