//! Row deserialization shared by the listing services.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes scanned rows, skipping ones that do not fit the model.
///
/// The store is external and unvalidated; a single malformed row must not
/// blank an entire listing, so bad rows are logged and dropped.
pub(crate) fn deserialize_rows<T: DeserializeOwned>(items: Vec<Value>, entity: &str) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!(entity, error = %e, "skipping malformed store record");
                None
            }
        })
        .collect()
}
