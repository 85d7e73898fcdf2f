//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// A registered player.
///
/// Users are created once and never mutated or deleted; `updated_at` equals
/// `created_at` in practice because no edit path exists. Field names are
/// serialized camelCase to match the store's existing table records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier, generated client-side at creation time.
    pub user_id: String,
    /// Display name, required and non-empty.
    pub user_name: String,
    /// Optional contact address; empty string when not provided.
    #[serde(default)]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user, stamping the id and both timestamps.
    ///
    /// The caller is responsible for name validation; this constructor
    /// stores whatever it is given.
    pub fn new(user_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: generate_id(),
            user_name: user_name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Looks up a user's display name by id.
pub fn name_of<'a>(users: &'a [User], user_id: &str) -> Option<&'a str> {
    users
        .iter()
        .find(|u| u.user_id == user_id)
        .map(|u| u.user_name.as_str())
}
