//! In-memory store client.
//!
//! Backs the service-layer tests: records live in a mutex-guarded map and
//! an injectable failure lets tests exercise the store-error paths.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use scorebook_core::error::{Result, ScorebookError};
use scorebook_core::store::{ScanFilter, StoreClient};

/// Map-backed store implementation for tests.
#[derive(Default)]
pub struct MemoryStoreClient {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    failure: Mutex<Option<String>>,
}

impl MemoryStoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Returns a snapshot of a table's records, in insertion order.
    pub fn items(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(ScorebookError::store(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl StoreClient for MemoryStoreClient {
    async fn put(&self, table: &str, item: Value) -> Result<()> {
        self.check_failure()?;
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(item);
        Ok(())
    }

    async fn scan(&self, table: &str, filter: Option<&ScanFilter>) -> Result<Vec<Value>> {
        self.check_failure()?;
        let items = self.items(table);
        Ok(match filter {
            Some(filter) => items.into_iter().filter(|i| filter.matches(i)).collect(),
            None => items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn injected_failure_surfaces_as_store_error() {
        let store = MemoryStoreClient::new();
        store.fail_with("permission denied");

        let err = store.put("users", json!({})).await.unwrap_err();
        assert!(err.is_store());
        assert!(err.to_string().contains("permission denied"));
    }

    #[tokio::test]
    async fn scan_filters_by_equality() {
        let store = MemoryStoreClient::new();
        store.put("scores", json!({"userId": "u1"})).await.unwrap();
        store.put("scores", json!({"userId": "u2"})).await.unwrap();

        let filter = ScanFilter::user_id("u1");
        let items = store.scan("scores", Some(&filter)).await.unwrap();
        assert_eq!(items.len(), 1);
    }
}
