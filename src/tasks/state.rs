//! State owned by the task reducer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::images::ImageRecord;
use crate::ui::mvi::UiState;

/// Task priority. Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort key: High = 1, Medium = 2, Low = 3.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Next priority in the selector, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    /// Previous priority in the selector, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(pub String);

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority '{}' (expected High, Medium or Low)", self.0)
    }
}

impl std::error::Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

/// Stable task identity, assigned by the reducer when the task is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub priority: Priority,
}

/// How a mutation addresses a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRef {
    /// Position in the current (sorted) list.
    Index(usize),
    /// Stable identifier.
    Id(TaskId),
}

impl TaskRef {
    /// Position of the referenced task in `tasks`, if it exists.
    pub fn position(self, tasks: &[Task]) -> Option<usize> {
        match self {
            TaskRef::Index(index) => (index < tasks.len()).then_some(index),
            TaskRef::Id(id) => tasks.iter().position(|task| task.id == id),
        }
    }
}

/// Display-name stamp. Not a credential.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub username: String,
    pub authenticated: bool,
}

/// The two kinds of outbound request the effect layer makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Assistant,
    Images,
}

/// Identity of one outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Placeholder used when loading is toggled without a concrete request.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// In-flight request per kind. `None` means idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loading {
    pub assistant: Option<RequestId>,
    pub images: Option<RequestId>,
}

impl Loading {
    pub fn slot(&self, kind: RequestKind) -> Option<RequestId> {
        match kind {
            RequestKind::Assistant => self.assistant,
            RequestKind::Images => self.images,
        }
    }

    pub fn slot_mut(&mut self, kind: RequestKind) -> &mut Option<RequestId> {
        match kind {
            RequestKind::Assistant => &mut self.assistant,
            RequestKind::Images => &mut self.images,
        }
    }

    pub fn is_loading(&self, kind: RequestKind) -> bool {
        self.slot(kind).is_some()
    }

    pub fn any(&self) -> bool {
        self.assistant.is_some() || self.images.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Always sorted by priority rank.
    pub tasks: Vec<Task>,
    pub next_task_id: u64,
    pub assistant_reply: Option<String>,
    pub images: Vec<ImageRecord>,
    pub loading: Loading,
    pub session: Session,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_task_id: 1,
            assistant_reply: None,
            images: Vec::new(),
            loading: Loading::default(),
            session: Session::default(),
        }
    }
}

impl UiState for AppState {}

impl AppState {
    pub fn is_loading(&self) -> bool {
        self.loading.any()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// True when the list honours the rank ordering.
    pub fn is_sorted_by_priority(&self) -> bool {
        self.tasks
            .windows(2)
            .all(|pair| pair[0].priority.rank() <= pair[1].priority.rank())
    }
}
