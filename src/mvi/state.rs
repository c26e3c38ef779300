/// Marker trait for state slices.
///
/// `PartialEq` lets subscribers skip redundant re-derivation; `Default`
/// is the state at process start.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
