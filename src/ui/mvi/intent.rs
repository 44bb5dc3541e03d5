//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a user action (query edited, search pressed) or the
/// outcome of an async operation (lookup resolved). Reducers consume them.
pub trait Intent: Send + 'static {}
