//! Reducer for the task manager state.

use crate::ui::mvi::Reducer;

use super::intent::AppIntent;
use super::state::{AppState, RequestId, RequestKind, Task, TaskId};

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::AddTask {
                description,
                priority,
            } => {
                let mut state = state;
                let id = TaskId(state.next_task_id);
                state.next_task_id = state.next_task_id.wrapping_add(1);
                state.tasks.push(Task {
                    id,
                    description,
                    priority,
                });
                sort_by_priority(&mut state.tasks);
                state
            }

            AppIntent::DeleteTask { target } => match target.position(&state.tasks) {
                Some(position) => {
                    let mut state = state;
                    state.tasks.remove(position);
                    state
                }
                None => state,
            },

            AppIntent::SetPriority { target, priority } => {
                let mut state = state;
                if let Some(position) = target.position(&state.tasks) {
                    state.tasks[position].priority = priority;
                }
                // Runs even when nothing matched; stable on a sorted list.
                sort_by_priority(&mut state.tasks);
                state
            }

            AppIntent::SetAssistantReply { text } => AppState {
                assistant_reply: Some(normalize_reply(&text)),
                ..state
            },

            AppIntent::SetImages { images } => AppState { images, ..state },

            AppIntent::SetLoading { kind, loading } => {
                let mut state = state;
                let slot = state.loading.slot_mut(kind);
                if !loading {
                    *slot = None;
                } else if slot.is_none() {
                    // Keep an in-flight id so its response still lands.
                    *slot = Some(RequestId::nil());
                }
                state
            }

            AppIntent::Login { username } => {
                let mut state = state;
                state.session.username = username;
                state.session.authenticated = true;
                state
            }

            AppIntent::Logout => AppState {
                session: Default::default(),
                ..state
            },

            AppIntent::AssistantRequested { request } => {
                let mut state = state;
                state.loading.assistant = Some(request);
                state
            }

            AppIntent::AssistantResponded { request, text } => {
                if is_stale(&state, RequestKind::Assistant, request) {
                    return state;
                }
                let mut state = state;
                state.loading.assistant = None;
                state.assistant_reply = Some(normalize_reply(&text));
                state
            }

            AppIntent::ImagesRequested { request } => {
                let mut state = state;
                state.loading.images = Some(request);
                state
            }

            AppIntent::ImagesResponded { request, images } => {
                if is_stale(&state, RequestKind::Images, request) {
                    return state;
                }
                let mut state = state;
                state.loading.images = None;
                if let Some(images) = images {
                    state.images = images;
                }
                state
            }
        }
    }
}

/// Stable sort by rank. Ties keep their previous relative order.
pub fn sort_by_priority(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.priority.rank());
}

/// Trim every line and drop the empty ones.
pub fn normalize_reply(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A response is stale only when a different request now owns the slot.
/// An empty slot (loading cleared by hand) still accepts the result.
fn is_stale(state: &AppState, kind: RequestKind, request: RequestId) -> bool {
    matches!(state.loading.slot(kind), Some(current) if current != request)
}
