//! Outbound calls whose results come back as intents.
//!
//! Each call gets a fresh [`RequestId`]. The caller dispatches the returned
//! `*Requested` intent right away; the matching `*Responded` intent arrives
//! later on the event channel. The reducer drops responses whose id is no
//! longer current, so overlapping requests cannot clobber each other.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::assistant::{reply_or_fallback, TextGenerator};
use crate::images::ImageSearch;
use crate::tasks::{AppIntent, RequestId};
use crate::ui::events::AppEvent;

pub struct Effects {
    assistant: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageSearch>,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl Effects {
    pub fn new(
        assistant: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageSearch>,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            assistant,
            images,
            runtime,
            events,
        }
    }

    /// Start a text generation request.
    ///
    /// Returns the `AssistantRequested` intent to dispatch now.
    pub fn ask_assistant(&self, prompt: String) -> AppIntent {
        let request = RequestId::new();
        let assistant = Arc::clone(&self.assistant);
        let events = self.events.clone();

        tracing::info!(request = %request, prompt_len = prompt.len(), "Assistant request started");
        self.runtime.spawn(async move {
            let text = reply_or_fallback(assistant.generate(&prompt).await);
            if events
                .send(AppEvent::Dispatch(AppIntent::AssistantResponded { request, text }))
                .is_err()
            {
                tracing::trace!(request = %request, "Assistant reply dropped (receiver gone)");
            }
        });

        AppIntent::AssistantRequested { request }
    }

    /// Start an image search.
    ///
    /// Returns the `ImagesRequested` intent to dispatch now.
    pub fn search_images(&self, query: String) -> AppIntent {
        let request = RequestId::new();
        let images = Arc::clone(&self.images);
        let events = self.events.clone();

        tracing::info!(request = %request, query = %query, "Image search started");
        self.runtime.spawn(async move {
            let images = match images.search(&query).await {
                Ok(results) => Some(results),
                Err(err) => {
                    tracing::error!(error = %err, "Error fetching images");
                    None
                }
            };
            if events
                .send(AppEvent::Dispatch(AppIntent::ImagesResponded { request, images }))
                .is_err()
            {
                tracing::trace!(request = %request, "Image results dropped (receiver gone)");
            }
        });

        AppIntent::ImagesRequested { request }
    }
}
