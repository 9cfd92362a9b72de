//! Text generation integration.

mod client;
mod error;

pub use client::{bulletize, reply_or_fallback, GeminiClient, TextGenerator, FALLBACK_REPLY};
pub use error::AssistantError;
