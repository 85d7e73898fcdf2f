//! User directory service.
//!
//! Loads and creates user records against the store, and owns the sorted
//! listing used for selection dropdowns and the directory view.

use std::sync::Arc;

use scorebook_core::error::{Result, ScorebookError};
use scorebook_core::store::StoreClient;
use scorebook_core::user::User;

use crate::records::deserialize_rows;

/// Service over the users table.
pub struct UserDirectory {
    store: Arc<dyn StoreClient>,
    table: String,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn StoreClient>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    /// Creates and persists a new user.
    ///
    /// Fails with a `Validation` error when the name is empty after
    /// trimming; nothing is written in that case.
    pub async fn add_user(&self, name: &str, email: Option<&str>) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScorebookError::validation("Please enter a user name"));
        }

        let user = User::new(name, email.map(str::trim).unwrap_or_default());
        self.store
            .put(&self.table, serde_json::to_value(&user)?)
            .await?;
        tracing::info!(user_id = %user.user_id, "added user");
        Ok(user)
    }

    /// Returns all users, sorted ascending by display name.
    ///
    /// The sort is case-insensitive (Unicode lowercase fold) and stable.
    /// An empty store yields an empty vec, not an error.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let items = self.store.scan(&self.table, None).await?;
        let mut users: Vec<User> = deserialize_rows(items, "user");
        users.sort_by(|a, b| {
            a.user_name
                .to_lowercase()
                .cmp(&b.user_name.to_lowercase())
        });
        Ok(users)
    }
}
