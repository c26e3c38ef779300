//! Composition root: owns the one store and the list/form state that
//! read from it.

use crate::config::Config;
use crate::form::{prepare_submit, FormIntent, FormReducer, FormState, Submission};
use crate::gateway::{FetchError, UserSource};
use crate::model::{User, UserId};
use crate::mvi::Reducer;
use crate::store::{IdAllocator, UserStore, UsersIntent};
use crate::validation::ValidationError;
use crate::view::{project, ListViewIntent, ListViewReducer, ListViewState, Projection};

/// Confirmation of a completed mutation, for the presentation layer to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    UserAdded,
    UserUpdated,
    UserDeleted,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::UserAdded => "User added!",
            Notice::UserUpdated => "User updated!",
            Notice::UserDeleted => "User deleted!",
        }
    }
}

pub struct App {
    store: UserStore,
    list_view: ListViewState,
    form: FormState,
    ids: IdAllocator,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            store: UserStore::new(),
            list_view: ListViewState::new(
                config.view.page_size,
                config.view.page_size_options.clone(),
            ),
            form: FormState::Idle,
            ids: IdAllocator::new(),
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn list_view(&self) -> &ListViewState {
        &self.list_view
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Fetch the initial list and record the outcome in the store.
    ///
    /// Returns the number of users loaded. On failure the list is left as
    /// it was and the store's status becomes `Error`.
    pub async fn initialize(&mut self, source: &dyn UserSource) -> Result<usize, FetchError> {
        self.begin_fetch();
        let result = source.fetch_all().await;
        self.complete_fetch(result)
    }

    /// Mark the fetch as in flight. The list stays usable meanwhile.
    pub fn begin_fetch(&mut self) {
        self.store.dispatch(UsersIntent::FetchStarted);
    }

    pub fn complete_fetch(&mut self, result: Result<Vec<User>, FetchError>) -> Result<usize, FetchError> {
        match result {
            Ok(users) => {
                let count = users.len();
                self.store.dispatch(UsersIntent::FetchSucceeded { users });
                Ok(count)
            }
            Err(err) => {
                self.store.dispatch(UsersIntent::FetchFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    pub fn update_list_view(&mut self, intent: ListViewIntent) {
        let current = std::mem::take(&mut self.list_view);
        self.list_view = ListViewReducer::reduce(current, intent);
    }

    /// The page of users the list screen should show right now.
    pub fn current_page(&self) -> Projection<'_> {
        project(self.store.users(), &self.list_view.query())
    }

    pub fn update_form(&mut self, intent: FormIntent) {
        let current = std::mem::take(&mut self.form);
        self.form = FormReducer::reduce(current, intent);
    }

    pub fn open_create(&mut self) {
        self.update_form(FormIntent::OpenCreate);
    }

    /// Open the edit form for `id`. Returns `false` if no such user exists.
    pub fn open_edit(&mut self, id: &UserId) -> bool {
        let Some(user) = self.store.find(id).cloned() else {
            return false;
        };
        self.update_form(FormIntent::OpenEdit { user });
        true
    }

    /// Validate the open form and, if it passes, apply it to the store.
    ///
    /// `Ok(None)` means no form was open. On a validation error the form
    /// stays open with the error attached.
    pub fn submit_form(&mut self) -> Result<Option<Notice>, ValidationError> {
        let Some(prepared) = prepare_submit(&self.form, self.store.state(), &mut self.ids) else {
            return Ok(None);
        };

        match prepared {
            Ok(submission) => {
                let notice = match &submission {
                    Submission::Add(_) => Notice::UserAdded,
                    Submission::Update(_) => Notice::UserUpdated,
                };
                tracing::info!(id = %submission.user().id, "{}", notice.message());
                self.store.dispatch(submission.into_intent());
                self.update_form(FormIntent::Accepted);
                Ok(Some(notice))
            }
            Err(error) => {
                tracing::debug!(kind = error.kind(), "Form submit rejected");
                self.update_form(FormIntent::Rejected {
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    pub fn delete_user(&mut self, id: &UserId) -> Notice {
        self.store.dispatch(UsersIntent::Delete { id: id.clone() });
        tracing::info!(id = %id, "User deleted");
        Notice::UserDeleted
    }

    /// Detail-route lookup by the textual id.
    pub fn find_user(&self, key: &str) -> Option<&User> {
        self.store.find_by_key(key)
    }
}
