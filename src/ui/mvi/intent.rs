//! Marker trait for intents.

/// Something that can be fed to a reducer.
///
/// Intents come from two places:
/// - the view (key presses turned into task or session changes)
/// - the effect layer (HTTP results delivered back to the UI thread)
///
/// `Send` is required because effect results cross from tokio workers
/// to the UI thread.
pub trait Intent: Send + 'static {}
