//! Gemini-compatible text generation client.
//!
//! Speaks the `models/{model}:generateContent` REST shape: one user turn in,
//! the text parts of the first candidate out.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;

use super::error::AssistantError;

/// Shown instead of a reply whenever generation fails.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request at the moment.";

/// Anything that can turn a prompt into a plain-text reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

pub struct GeminiClient {
    client: Client,
    config: AssistantConfig,
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// `{base_url}/v1beta/models/{model}:generateContent?key=<api_key>`
    pub fn endpoint(&self, api_key: &str) -> Result<Url, AssistantError> {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        Url::parse_with_params(&endpoint, [("key", api_key)])
            .map_err(|e| AssistantError::Url(e.to_string()))
    }

    fn build_request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(AssistantError::NotConfigured),
        };

        let url = self.endpoint(api_key)?;
        let request_body = Self::build_request(prompt);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, latency_ms, error = %error_text, "Assistant API error");
            return Err(AssistantError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let body: GenerateResponse = serde_json::from_str(&response_text).map_err(|e| {
            AssistantError::ParseError(format!("Failed to parse response JSON: {}", e))
        })?;

        let text = extract_text(body)?;
        tracing::info!(latency_ms, reply_len = text.len(), "Assistant reply received");
        Ok(bulletize(&text))
    }
}

/// Collapse any generation outcome into reply text, logging failures.
pub fn reply_or_fallback(result: Result<String, AssistantError>) -> String {
    match result {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(error = %err, "Error fetching assistant reply");
            FALLBACK_REPLY.to_string()
        }
    }
}

/// Markdown emphasis markers render as bullets in the terminal.
pub fn bulletize(text: &str) -> String {
    text.replace('*', "•")
}

fn extract_text(response: GenerateResponse) -> Result<String, AssistantError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(AssistantError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        return Err(AssistantError::EmptyResponse);
    }
    Ok(text)
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
