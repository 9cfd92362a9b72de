//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place where state transitions happen and must
/// stay a pure function: (State, Intent) -> State. It must not panic on any
/// input.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
