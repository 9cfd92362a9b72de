use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Text generation provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Base URL of the generative language API.
    #[serde(default = "default_assistant_base_url")]
    pub base_url: String,
    /// Model name used in the `models/{model}:generateContent` path.
    #[serde(default = "default_assistant_model")]
    pub model: String,
    /// API key. Falls back to `TASKDECK_GEMINI_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 60).
    #[serde(default = "default_assistant_timeout")]
    pub timeout_seconds: u32,
}

/// Image search provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_images_base_url")]
    pub base_url: String,
    /// Client-ID access key. Falls back to `TASKDECK_UNSPLASH_ACCESS_KEY`.
    #[serde(default)]
    pub access_key: Option<String>,
    /// Results per search (default: 6).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_images_timeout")]
    pub timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the platform cache dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const ASSISTANT_API_KEY_ENV: &str = "TASKDECK_GEMINI_API_KEY";
pub const IMAGES_ACCESS_KEY_ENV: &str = "TASKDECK_UNSPLASH_ACCESS_KEY";

fn default_assistant_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_assistant_model() -> String {
    "gemini-pro".to_string()
}

fn default_assistant_timeout() -> u32 {
    60
}

fn default_images_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_per_page() -> u32 {
    6
}

fn default_images_timeout() -> u32 {
    30
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: default_assistant_base_url(),
            model: default_assistant_model(),
            api_key: None,
            timeout_seconds: default_assistant_timeout(),
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_url: default_images_base_url(),
            access_key: None,
            per_page: default_per_page(),
            timeout_seconds: default_images_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
