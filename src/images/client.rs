//! Unsplash-compatible image search client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::ImagesConfig;

use super::error::ImageSearchError;
use super::types::{ImageRecord, SearchResponse};

/// Anything that can turn a query into image records.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<ImageRecord>, ImageSearchError>;
}

pub struct UnsplashClient {
    client: Client,
    config: ImagesConfig,
}

impl UnsplashClient {
    pub fn new(config: ImagesConfig) -> Result<Self, ImageSearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config
            .access_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    /// `{base_url}/search/photos?query=<q>&per_page=<n>`
    pub fn search_url(&self, query: &str) -> Result<Url, ImageSearchError> {
        let endpoint = format!("{}/search/photos", self.config.base_url.trim_end_matches('/'));
        let per_page = self.config.per_page.to_string();
        Url::parse_with_params(&endpoint, [("query", query), ("per_page", per_page.as_str())])
            .map_err(|e| ImageSearchError::Url(e.to_string()))
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    async fn search(&self, query: &str) -> Result<Vec<ImageRecord>, ImageSearchError> {
        let access_key = match self.config.access_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ImageSearchError::NotConfigured),
        };

        let url = self.search_url(query)?;
        tracing::debug!(url = %url, "Sending image search request");

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Client-ID {}", access_key))
            .header("Accept-Version", "v1")
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, latency_ms, error = %message, "Image search API error");
            return Err(ImageSearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| ImageSearchError::ParseError(e.to_string()))?;

        tracing::info!(
            results = parsed.results.len(),
            latency_ms,
            "Image search completed"
        );
        Ok(parsed.results)
    }
}
