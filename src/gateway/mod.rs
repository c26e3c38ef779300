//! Fetch Gateway: one read-only call that yields the initial user list.

mod error;
mod http;

pub use error::{FetchError, FetchErrorKind};
pub use http::HttpUserSource;

use async_trait::async_trait;

use crate::model::User;

/// Somewhere the initial user list can be fetched from.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the full list. Called once at startup.
    async fn fetch_all(&self) -> Result<Vec<User>, FetchError>;
}
