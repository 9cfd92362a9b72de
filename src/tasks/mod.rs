//! Task manager core.
//!
//! Uses the MVI pattern:
//! - `state.rs` - tasks, session, assistant reply, images, loading slots
//! - `intent.rs` - everything that can change that state
//! - `reducer.rs` - the pure state transitions

mod intent;
mod reducer;
mod state;

pub use intent::AppIntent;
pub use reducer::{normalize_reply, sort_by_priority, AppReducer};
pub use state::{
    AppState, Loading, ParsePriorityError, Priority, RequestId, RequestKind, Session, Task,
    TaskId, TaskRef,
};
