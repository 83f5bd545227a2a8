//! Base trait for widget state.

/// Marker trait for widget state objects.
///
/// States are:
/// - Values (Clone to keep the previous version around)
/// - Self-contained (everything needed to render the widget)
/// - Comparable (PartialEq, so callers can tell whether anything changed)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
