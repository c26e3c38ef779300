//! Record Store: the user list plus the status of the initial fetch.

mod id;
mod intent;
mod reducer;
mod state;
mod user_store;

pub use id::IdAllocator;
pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use state::{FetchStatus, UsersState};
pub use user_store::UserStore;
