//! Image search integration.

mod client;
mod error;
mod types;

pub use client::{ImageSearch, UnsplashClient};
pub use error::ImageSearchError;
pub use types::{ImageAuthor, ImageRecord, ImageUrls};
