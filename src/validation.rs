//! Checks on user form input before it reaches the store.
//!
//! Create and update differ in one respect: only create rejects a name
//! that is already taken. Updates may leave two users with the same name.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::model::{User, UserFields};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in Name, Email, and Company.")]
    MissingField,

    #[error("A user with this name already exists.")]
    DuplicateName,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "missing_field",
            ValidationError::DuplicateName => "duplicate_name",
            ValidationError::InvalidEmail => "invalid_email",
        }
    }
}

/// Raw, untrimmed form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: company.into(),
        }
    }

    /// Pre-fill from an existing record for editing.
    pub fn from_user(user: &User) -> Self {
        Self::new(user.name.clone(), user.email.clone(), user.company.name.clone())
    }

    fn trimmed(&self) -> UserFields {
        UserFields {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate a new user against the users already present.
pub fn validate_for_create(draft: &UserDraft, existing: &[User]) -> Result<UserFields, ValidationError> {
    let fields = draft.trimmed();
    check_required(&fields)?;

    let lowered = fields.name.to_lowercase();
    if existing.iter().any(|u| u.name.to_lowercase() == lowered) {
        return Err(ValidationError::DuplicateName);
    }

    check_email(&fields)?;
    Ok(fields)
}

/// Validate an edit of an existing user. Name uniqueness is not checked.
pub fn validate_for_update(draft: &UserDraft) -> Result<UserFields, ValidationError> {
    let fields = draft.trimmed();
    check_required(&fields)?;
    check_email(&fields)?;
    Ok(fields)
}

fn check_required(fields: &UserFields) -> Result<(), ValidationError> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.company.is_empty() {
        return Err(ValidationError::MissingField);
    }
    Ok(())
}

fn check_email(fields: &UserFields) -> Result<(), ValidationError> {
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
