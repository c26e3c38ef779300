use crate::model::User;
use crate::mvi::Intent;
use crate::validation::ValidationError;

#[derive(Debug, Clone)]
pub enum FormIntent {
    OpenCreate,
    OpenEdit { user: User },
    SetName { value: String },
    SetEmail { value: String },
    SetCompany { value: String },
    /// Submit failed validation.
    Rejected { error: ValidationError },
    /// Submit passed validation and the store was updated.
    Accepted,
    Cancel,
}

impl Intent for FormIntent {}
