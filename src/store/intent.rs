use crate::model::{User, UserId};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    FetchStarted,
    /// Replaces the whole list.
    FetchSucceeded { users: Vec<User> },
    /// Leaves the list untouched.
    FetchFailed { message: String },
    /// Prepends an already validated user.
    Add { user: User },
    /// Replaces the user with the same id in place. Missing id is a no-op.
    Update { user: User },
    /// Removes every user with this id. Missing id is a no-op.
    Delete { id: UserId },
}

impl Intent for UsersIntent {}
