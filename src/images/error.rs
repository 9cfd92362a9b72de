use thiserror::Error;

/// Errors that can occur while searching for images.
#[derive(Debug, Error)]
pub enum ImageSearchError {
    /// No access key in config or environment.
    #[error("Image search is not configured (missing access key)")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid search URL: {0}")]
    Url(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse search response: {0}")]
    ParseError(String),
}
