//! Local JSON directory store.
//!
//! A [`StoreClient`] backed by one JSON file per table under a base
//! directory (`{base}/{table}.json`, holding an array of records). Used as
//! the development backend and by filesystem-level tests. Insertion order
//! is preserved, which makes scan order deterministic here, unlike the
//! remote store.

use std::path::PathBuf;

use serde_json::Value;
use tokio::fs;

use scorebook_core::error::{Result, ScorebookError};
use scorebook_core::store::{ScanFilter, StoreClient};

use crate::paths::ScorebookPaths;

/// File-per-table store implementation.
pub struct DirTableStore {
    base_dir: PathBuf,
}

impl DirTableStore {
    /// Creates a store under the platform data directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_dir: ScorebookPaths::tables_dir()?,
        })
    }

    /// Creates a store with a custom base directory (for testing).
    pub fn with_base_path(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", table))
    }

    async fn read_table(&self, table: &str) -> Result<Vec<Value>> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| ScorebookError::store(format!("Failed to read table file: {}", e)))?;
        let items: Vec<Value> = serde_json::from_str(&content)
            .map_err(|e| ScorebookError::store(format!("Corrupt table file {:?}: {}", path, e)))?;
        Ok(items)
    }

    async fn write_table(&self, table: &str, items: &[Value]) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| ScorebookError::store(format!("Failed to create table dir: {}", e)))?;

        let serialized = serde_json::to_string_pretty(items)
            .map_err(|e| ScorebookError::store(format!("Failed to serialize table: {}", e)))?;
        fs::write(self.table_path(table), serialized)
            .await
            .map_err(|e| ScorebookError::store(format!("Failed to write table file: {}", e)))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl StoreClient for DirTableStore {
    async fn put(&self, table: &str, item: Value) -> Result<()> {
        let mut items = self.read_table(table).await?;
        items.push(item);
        self.write_table(table, &items).await?;
        tracing::debug!(table, count = items.len(), "stored record in local table");
        Ok(())
    }

    async fn scan(&self, table: &str, filter: Option<&ScanFilter>) -> Result<Vec<Value>> {
        let items = self.read_table(table).await?;
        let items = match filter {
            Some(filter) => items.into_iter().filter(|i| filter.matches(i)).collect(),
            None => items,
        };
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn default_store_roots_at_the_platform_tables_dir() {
        let store = DirTableStore::new().unwrap();
        assert_eq!(store.base_dir, crate::ScorebookPaths::tables_dir().unwrap());
    }

    #[tokio::test]
    async fn scan_of_missing_table_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirTableStore::with_base_path(temp_dir.path().to_path_buf());

        let items = store.scan("users", None).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn put_then_scan_preserves_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirTableStore::with_base_path(temp_dir.path().to_path_buf());

        store.put("scores", json!({"scoreId": "a"})).await.unwrap();
        store.put("scores", json!({"scoreId": "b"})).await.unwrap();
        store.put("scores", json!({"scoreId": "c"})).await.unwrap();

        let items = store.scan("scores", None).await.unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i["scoreId"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn scan_applies_the_equality_filter() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirTableStore::with_base_path(temp_dir.path().to_path_buf());

        store
            .put("scores", json!({"scoreId": "a", "userId": "u1"}))
            .await
            .unwrap();
        store
            .put("scores", json!({"scoreId": "b", "userId": "u2"}))
            .await
            .unwrap();

        let filter = ScanFilter::user_id("u2");
        let items = store.scan("scores", Some(&filter)).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["scoreId"], "b");
    }

    #[tokio::test]
    async fn tables_do_not_bleed_into_each_other() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirTableStore::with_base_path(temp_dir.path().to_path_buf());

        store.put("users", json!({"userId": "u1"})).await.unwrap();
        assert!(store.scan("scores", None).await.unwrap().is_empty());
    }
}
