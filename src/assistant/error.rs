use thiserror::Error;

/// Errors that can occur while asking the text-generation API.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No API key in config or environment.
    #[error("Assistant is not configured (missing API key)")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    Url(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The response parsed but carried no text.
    #[error("Response contained no text")]
    EmptyResponse,
}
