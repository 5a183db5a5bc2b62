use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A user record as the API returns it.
///
/// `created_at` stays a raw string on purpose: a record with a missing or
/// garbled timestamp still has to show up in the list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of a create or full update request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    /// Trims both fields, returns `None` if either ends up empty.
    pub fn parse(name: &str, email: &str) -> Option<Self> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

/// Partial update accepted by the server, absent fields are left alone.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UserDraft> for UserPatch {
    fn from(draft: UserDraft) -> Self {
        Self {
            name: Some(draft.name),
            email: Some(draft.email),
        }
    }
}
