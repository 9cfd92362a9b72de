//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use taskdeck::assistant::{AssistantError, TextGenerator};
use taskdeck::images::{ImageRecord, ImageSearch, ImageSearchError};
use tempfile::TempDir;

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Three images shaped like the real search API returns them.
pub const SEARCH_BODY: &str = r#"{
    "total": 3,
    "results": [
        {"id": "a1", "urls": {"small": "https://img/a1"}, "alt_description": "a lake", "user": {"name": "Ana"}},
        {"id": "b2", "urls": {"small": "https://img/b2"}, "alt_description": null, "user": {"name": "Ben"}},
        {"id": "c3", "urls": {"small": "https://img/c3"}, "user": {"name": "Cy"}, "likes": 12}
    ]
}"#;

pub fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    })
    .to_string()
}

/// Text generator returning a fixed reply after a delay.
pub struct FakeGenerator {
    pub reply: Result<String, String>,
    pub delay: Duration,
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
        tokio::time::sleep(self.delay).await;
        self.reply.clone().map_err(|message| AssistantError::ApiError {
            status: 500,
            message,
        })
    }
}

/// Image search returning fixed records, or failing.
pub struct FakeSearch {
    pub results: Option<Vec<ImageRecord>>,
}

#[async_trait]
impl ImageSearch for FakeSearch {
    async fn search(&self, _query: &str) -> Result<Vec<ImageRecord>, ImageSearchError> {
        self.results.clone().ok_or(ImageSearchError::NotConfigured)
    }
}
