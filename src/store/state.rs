use crate::model::{User, UserId};
use crate::mvi::State;

/// Coarse progress of the initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Success => "success",
            FetchStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    /// Insertion order matters: newly added users come first.
    pub list: Vec<User>,
    pub status: FetchStatus,
    /// Message of the most recent failed fetch, cleared on success.
    pub last_error: Option<String>,
}

impl State for UsersState {}

impl UsersState {
    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.list.iter().find(|u| &u.id == id)
    }

    /// Look a user up by the textual form of its id, as a detail route
    /// carries it.
    pub fn find_by_key(&self, key: &str) -> Option<&User> {
        self.list.iter().find(|u| u.id.to_string() == key)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
