//! Marker trait for reducer-owned state.

/// State values are cloned to snapshot, compared to detect changes and
/// defaulted to build the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
