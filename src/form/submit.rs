use crate::form::state::{FormMode, FormState};
use crate::model::User;
use crate::store::{IdAllocator, UsersIntent, UsersState};
use crate::validation::{validate_for_create, validate_for_update, ValidationError};

/// A validated form, ready to be applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Add(User),
    Update(User),
}

impl Submission {
    pub fn user(&self) -> &User {
        match self {
            Submission::Add(user) | Submission::Update(user) => user,
        }
    }

    pub fn into_intent(self) -> UsersIntent {
        match self {
            Submission::Add(user) => UsersIntent::Add { user },
            Submission::Update(user) => UsersIntent::Update { user },
        }
    }
}

/// Validate the open form and build the store mutation it stands for.
///
/// Returns `None` when no form is open. A new user gets a fresh id; an
/// edited user keeps its id, phone and website.
pub fn prepare_submit(
    form: &FormState,
    users: &UsersState,
    ids: &mut IdAllocator,
) -> Option<Result<Submission, ValidationError>> {
    let FormState::Editing { mode, draft, .. } = form else {
        return None;
    };

    let submission = match mode {
        FormMode::Create => validate_for_create(draft, &users.list)
            .map(|fields| Submission::Add(User::new(ids.next(users), fields))),
        FormMode::Edit { original } => validate_for_update(draft)
            .map(|fields| Submission::Update(original.clone().with_fields(fields))),
    };
    Some(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormIntent, FormReducer};
    use crate::model::{Company, UserId};
    use crate::mvi::Reducer;

    fn amy() -> User {
        User {
            id: UserId::Number(2),
            name: "Amy".to_string(),
            email: "a@x.com".to_string(),
            company: Company::new("Acme"),
            phone: Some("555".to_string()),
            website: Some("amy.dev".to_string()),
        }
    }

    fn filled(state: FormState, name: &str, email: &str, company: &str) -> FormState {
        let state = FormReducer::reduce(
            state,
            FormIntent::SetName {
                value: name.to_string(),
            },
        );
        let state = FormReducer::reduce(
            state,
            FormIntent::SetEmail {
                value: email.to_string(),
            },
        );
        FormReducer::reduce(
            state,
            FormIntent::SetCompany {
                value: company.to_string(),
            },
        )
    }

    #[test]
    fn idle_form_has_nothing_to_submit() {
        let users = UsersState::default();
        assert!(prepare_submit(&FormState::Idle, &users, &mut IdAllocator::new()).is_none());
    }

    #[test]
    fn create_builds_add_with_fresh_id() {
        let users = UsersState {
            list: vec![amy()],
            ..UsersState::default()
        };
        let form = filled(
            FormReducer::reduce(FormState::Idle, FormIntent::OpenCreate),
            " Bob ",
            "b@x.com",
            "Initech",
        );
        let submission = prepare_submit(&form, &users, &mut IdAllocator::new())
            .unwrap()
            .unwrap();
        match submission {
            Submission::Add(user) => {
                assert_eq!(user.name, "Bob");
                assert_eq!(user.company.name, "Initech");
                assert_ne!(user.id, UserId::Number(2));
                assert!(user.phone.is_none());
            }
            other => panic!("expected Add, got {:?}", other),
        }
    }

    #[test]
    fn create_rejects_taken_name() {
        let users = UsersState {
            list: vec![amy()],
            ..UsersState::default()
        };
        let form = filled(
            FormReducer::reduce(FormState::Idle, FormIntent::OpenCreate),
            "AMY",
            "other@x.com",
            "Acme",
        );
        let result = prepare_submit(&form, &users, &mut IdAllocator::new()).unwrap();
        assert_eq!(result.unwrap_err(), ValidationError::DuplicateName);
    }

    #[test]
    fn edit_builds_update_preserving_contact_data() {
        let users = UsersState {
            list: vec![amy()],
            ..UsersState::default()
        };
        let form = FormReducer::reduce(FormState::Idle, FormIntent::OpenEdit { user: amy() });
        let form = FormReducer::reduce(
            form,
            FormIntent::SetEmail {
                value: "amy@new.io".to_string(),
            },
        );
        let submission = prepare_submit(&form, &users, &mut IdAllocator::new())
            .unwrap()
            .unwrap();
        match submission {
            Submission::Update(user) => {
                assert_eq!(user.id, UserId::Number(2));
                assert_eq!(user.email, "amy@new.io");
                assert_eq!(user.phone.as_deref(), Some("555"));
                assert_eq!(user.website.as_deref(), Some("amy.dev"));
            }
            other => panic!("expected Update, got {:?}", other),
        }
    }

    #[test]
    fn submission_maps_to_matching_store_intent() {
        let add = Submission::Add(amy());
        assert_eq!(add.user().name, "Amy");
        assert!(matches!(add.into_intent(), UsersIntent::Add { user } if user == amy()));

        let update = Submission::Update(amy());
        assert!(matches!(update.into_intent(), UsersIntent::Update { user } if user == amy()));
    }
}
