//! Store client trait.
//!
//! Defines the interface over the managed key-value store. All persistence,
//! querying, and filtering are delegated to the store; this crate only
//! shapes the calls.

use crate::error::Result;
use serde_json::Value;

/// A single-field equality predicate applied during a scan.
///
/// The store client translates this into whatever native filter mechanism
/// the underlying store exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFilter {
    pub field: String,
    pub value: String,
}

impl ScanFilter {
    /// Builds the `userId` equality filter used by score listings.
    pub fn user_id(value: impl Into<String>) -> Self {
        Self {
            field: "userId".to_string(),
            value: value.into(),
        }
    }

    /// Applies the predicate to a raw record.
    ///
    /// Used by store implementations that filter in-process; remote stores
    /// translate the predicate to their native filter expression instead.
    pub fn matches(&self, item: &Value) -> bool {
        item.get(&self.field).and_then(Value::as_str) == Some(self.value.as_str())
    }
}

/// An abstract client for the managed key-value store.
///
/// This trait defines the contract for writing and scanning table records,
/// decoupling the application's services from the specific store (remote
/// HTTP store, local JSON directory, in-memory test double).
///
/// Implementations do not retry and enforce no timeout; any transport or
/// permission failure surfaces as `ScorebookError::Store` carrying the
/// underlying message.
#[async_trait::async_trait]
pub trait StoreClient: Send + Sync {
    /// Persists a single record into the named table.
    async fn put(&self, table: &str, item: Value) -> Result<()>;

    /// Returns all records of the named table, restricted by the equality
    /// filter when one is given.
    ///
    /// Scan order is store-defined; callers needing a deterministic order
    /// must sort the result themselves.
    async fn scan(&self, table: &str, filter: Option<&ScanFilter>) -> Result<Vec<Value>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_filter_targets_the_wire_field() {
        let filter = ScanFilter::user_id("u1");
        assert_eq!(filter.field, "userId");
        assert_eq!(filter.value, "u1");
    }

    #[test]
    fn filter_matches_on_string_equality_only() {
        let filter = ScanFilter::user_id("u1");
        assert!(filter.matches(&serde_json::json!({"userId": "u1"})));
        assert!(!filter.matches(&serde_json::json!({"userId": "u2"})));
        assert!(!filter.matches(&serde_json::json!({"other": "u1"})));
        assert!(!filter.matches(&serde_json::json!({"userId": 1})));
    }
}
