use crate::mvi::Reducer;
use crate::form::intent::FormIntent;
use crate::form::state::{FormMode, FormState};
use crate::validation::UserDraft;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenCreate => FormState::Editing {
                mode: FormMode::Create,
                draft: UserDraft::default(),
                error: None,
            },
            FormIntent::OpenEdit { user } => FormState::Editing {
                draft: UserDraft::from_user(&user),
                mode: FormMode::Edit { original: user },
                error: None,
            },
            FormIntent::SetName { value } => edit_draft(state, |d| d.name = value),
            FormIntent::SetEmail { value } => edit_draft(state, |d| d.email = value),
            FormIntent::SetCompany { value } => edit_draft(state, |d| d.company = value),
            FormIntent::Rejected { error } => match state {
                FormState::Editing { mode, draft, .. } => FormState::Editing {
                    mode,
                    draft,
                    error: Some(error),
                },
                FormState::Idle => FormState::Idle,
            },
            FormIntent::Accepted | FormIntent::Cancel => FormState::Idle,
        }
    }
}

/// The shown error stays until the next submit.
fn edit_draft(state: FormState, apply: impl FnOnce(&mut UserDraft)) -> FormState {
    match state {
        FormState::Editing {
            mode,
            mut draft,
            error,
        } => {
            apply(&mut draft);
            FormState::Editing { mode, draft, error }
        }
        FormState::Idle => FormState::Idle,
    }
}
