//! The single authoritative user store.
//!
//! Owned by the composition root and lent to whoever needs to read or
//! mutate it. Every mutation goes through [`UserStore::dispatch`], which
//! runs [`UsersReducer`] and publishes the result to subscribers.

use tokio::sync::watch;

use crate::model::{User, UserId};
use crate::mvi::Reducer;
use crate::store::intent::UsersIntent;
use crate::store::reducer::UsersReducer;
use crate::store::state::UsersState;

pub struct UserStore {
    state: UsersState,
    revision: u64,
    publisher: watch::Sender<UsersState>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_state(UsersState::default())
    }

    pub fn with_state(state: UsersState) -> Self {
        let (publisher, _) = watch::channel(state.clone());
        Self {
            state,
            revision: 0,
            publisher,
        }
    }

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    pub fn users(&self) -> &[User] {
        &self.state.list
    }

    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.state.find(id)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&User> {
        self.state.find_by_key(key)
    }

    /// Number of dispatches applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Receive every new state after it is applied.
    pub fn subscribe(&self) -> watch::Receiver<UsersState> {
        self.publisher.subscribe()
    }

    /// Apply an intent and publish the resulting state.
    pub fn dispatch(&mut self, intent: UsersIntent) -> &UsersState {
        match &intent {
            UsersIntent::Update { user } if !self.state.contains(&user.id) => {
                tracing::debug!(id = %user.id, "Update for unknown user ignored");
            }
            UsersIntent::Delete { id } if !self.state.contains(id) => {
                tracing::debug!(id = %id, "Delete for unknown user ignored");
            }
            UsersIntent::FetchSucceeded { users } => {
                tracing::info!(count = users.len(), "User list replaced");
            }
            UsersIntent::FetchFailed { message } => {
                tracing::warn!(error = %message, "User fetch failed");
            }
            _ => {}
        }

        let current = std::mem::take(&mut self.state);
        self.state = UsersReducer::reduce(current, intent);
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            status = self.state.status.as_str(),
            users = self.state.len(),
            "Store updated"
        );
        self.publisher.send_replace(self.state.clone());
        &self.state
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
