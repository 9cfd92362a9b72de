//! Model-View-Intent (MVI) primitives.
//!
//! Every state change in taskdeck flows one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value holding everything the view renders
//! - **Intent**: a user action or an effect result
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
