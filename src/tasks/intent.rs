//! Intents accepted by the task reducer.

use crate::images::ImageRecord;
use crate::ui::mvi::Intent;

use super::state::{Priority, RequestId, RequestKind, TaskRef};

#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Append a task and re-sort. Blank descriptions are the view's problem.
    AddTask {
        description: String,
        priority: Priority,
    },

    DeleteTask { target: TaskRef },

    SetPriority { target: TaskRef, priority: Priority },

    /// Store an assistant reply after trimming lines and dropping blanks.
    SetAssistantReply { text: String },

    SetImages { images: Vec<ImageRecord> },

    /// Toggle the loading slot of one request kind without a request id.
    SetLoading { kind: RequestKind, loading: bool },

    Login { username: String },

    Logout,

    /// An assistant request was sent.
    AssistantRequested { request: RequestId },

    /// An assistant request finished (reply or fallback text).
    AssistantResponded { request: RequestId, text: String },

    /// An image search was sent.
    ImagesRequested { request: RequestId },

    /// An image search finished. `None` means it failed and the previous
    /// results stay.
    ImagesResponded {
        request: RequestId,
        images: Option<Vec<ImageRecord>>,
    },
}

impl Intent for AppIntent {}

impl AppIntent {
    pub fn add_task(description: impl Into<String>, priority: Priority) -> Self {
        Self::AddTask {
            description: description.into(),
            priority,
        }
    }

    pub fn delete_at(index: usize) -> Self {
        Self::DeleteTask {
            target: TaskRef::Index(index),
        }
    }

    pub fn set_priority_at(index: usize, priority: Priority) -> Self {
        Self::SetPriority {
            target: TaskRef::Index(index),
            priority,
        }
    }

    pub fn login(username: impl Into<String>) -> Self {
        Self::Login {
            username: username.into(),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::SetPriority { .. } => "set_priority",
            Self::SetAssistantReply { .. } => "set_assistant_reply",
            Self::SetImages { .. } => "set_images",
            Self::SetLoading { .. } => "set_loading",
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::AssistantRequested { .. } => "assistant_requested",
            Self::AssistantResponded { .. } => "assistant_responded",
            Self::ImagesRequested { .. } => "images_requested",
            Self::ImagesResponded { .. } => "images_responded",
        }
    }
}
