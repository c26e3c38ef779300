use crate::mvi::Reducer;
use crate::store::intent::UsersIntent;
use crate::store::state::{FetchStatus, UsersState};

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::FetchStarted => UsersState {
                status: FetchStatus::Loading,
                ..state
            },
            UsersIntent::FetchSucceeded { users } => UsersState {
                list: users,
                status: FetchStatus::Success,
                last_error: None,
            },
            UsersIntent::FetchFailed { message } => UsersState {
                status: FetchStatus::Error,
                last_error: Some(message),
                ..state
            },
            UsersIntent::Add { user } => {
                let mut list = state.list;
                list.insert(0, user);
                UsersState { list, ..state }
            }
            UsersIntent::Update { user } => {
                let mut list = state.list;
                if let Some(slot) = list.iter_mut().find(|u| u.id == user.id) {
                    *slot = user;
                }
                UsersState { list, ..state }
            }
            UsersIntent::Delete { id } => {
                let mut list = state.list;
                list.retain(|u| u.id != id);
                UsersState { list, ..state }
            }
        }
    }
}
