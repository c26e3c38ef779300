//! Marker trait for intents.

/// Something that happened and may change state.
///
/// Covers form edits, list controls (search, sort, paging), record
/// mutations, and the outcome of the initial fetch.
pub trait Intent: Send + 'static {}
