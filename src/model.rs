//! User record types shared by every layer.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Shown in place of optional contact fields the remote record lacks.
pub const ABSENT_PLACEHOLDER: &str = "-";

/// Opaque record identifier.
///
/// Fetched records keep whatever the remote sent (a JSON number or a
/// string); records created locally always get a `Number`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single user as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: Company,
    /// Read-only; only present on fetched records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Read-only; only present on fetched records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl User {
    /// Build a locally created record from validated fields.
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            company: Company::new(fields.company),
            phone: None,
            website: None,
        }
    }

    /// Replace the editable fields, keeping id and read-only contact data.
    pub fn with_fields(self, fields: UserFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            company: Company::new(fields.company),
            ..self
        }
    }

    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or(ABSENT_PLACEHOLDER)
    }

    pub fn website_display(&self) -> &str {
        self.website.as_deref().unwrap_or(ABSENT_PLACEHOLDER)
    }
}

/// Editable fields after trimming and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub company: String,
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
