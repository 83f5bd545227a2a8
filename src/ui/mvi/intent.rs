//! Base trait for widget intents.

/// Marker trait for intent objects.
///
/// An intent is one user action (a key press, a form submit, a checkbox
/// toggle) already translated into widget terms. Reducers apply intents in
/// the order they were dispatched; nothing is batched or coalesced.
pub trait Intent: Send + 'static {}
