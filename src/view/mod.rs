//! Derived View Engine plus the list screen's own state slice.

mod intent;
mod projection;
mod reducer;
mod state;

pub use intent::ListViewIntent;
pub use projection::{project, Projection, SortOrder, ViewQuery};
pub use reducer::ListViewReducer;
pub use state::{ListViewState, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
