use crate::model::User;
use crate::mvi::State;
use crate::validation::{UserDraft, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    /// `original` is the record as it was when the form opened.
    Edit { original: User },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Editing {
        mode: FormMode,
        draft: UserDraft,
        /// Set by a rejected submit; input is kept for correction.
        error: Option<ValidationError>,
    },
}

impl State for FormState {}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            Self::Idle => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Editing { error, .. } => error.as_ref(),
            Self::Idle => None,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Editing {
                mode: FormMode::Create,
                ..
            } => Some("Add User"),
            Self::Editing {
                mode: FormMode::Edit { .. },
                ..
            } => Some("Edit User"),
            Self::Idle => None,
        }
    }
}
