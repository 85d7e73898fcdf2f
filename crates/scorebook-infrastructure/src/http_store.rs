//! HTTP store client.
//!
//! Talks to the managed key-value store's REST surface. The endpoint is
//! derived from the configured region (`SCOREBOOK_STORE_ENDPOINT`
//! overrides it for self-hosted deployments); credentials ride along as
//! request headers. No retry and no timeout policy: a failed call is
//! surfaced once, as a `Store` error carrying the remote message.

use std::env;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use scorebook_core::config::StoreConfig;
use scorebook_core::error::{Result, ScorebookError};
use scorebook_core::store::{ScanFilter, StoreClient};

const ENDPOINT_ENV: &str = "SCOREBOOK_STORE_ENDPOINT";
const ACCESS_KEY_HEADER: &str = "x-access-key-id";
const SECRET_KEY_HEADER: &str = "x-secret-access-key";

/// Remote store client over HTTPS.
#[derive(Clone, Debug)]
pub struct HttpStoreClient {
    client: Client,
    base_url: String,
    access_key_id: String,
    secret_access_key: String,
}

#[derive(Deserialize)]
struct ScanResponse {
    items: Vec<Value>,
}

impl HttpStoreClient {
    /// Creates a client from a loaded configuration.
    ///
    /// Fails with a `Config` error when region or credentials are missing,
    /// so the caller can tell the user to configure the store first.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(ScorebookError::config(
                "store is not configured; run `scorebook config set` first",
            ));
        }

        Ok(Self {
            client: Client::new(),
            base_url: Self::endpoint_for_region(&config.region),
            access_key_id: config.access_key_id.clone(),
            secret_access_key: config.secret_access_key.clone(),
        })
    }

    /// Overrides the endpoint after construction (for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint_for_region(region: &str) -> String {
        env::var(ENDPOINT_ENV)
            .unwrap_or_else(|_| format!("https://kv.{}.scorebook-store.net", region))
    }

    fn items_url(&self, table: &str) -> String {
        format!("{}/tables/{}/items", self.base_url, table)
    }

    async fn error_from_response(response: reqwest::Response) -> ScorebookError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            body
        };
        match status {
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                ScorebookError::store(format!("store rejected credentials: {}", detail))
            }
            _ => ScorebookError::store(format!("store returned {}: {}", status, detail)),
        }
    }
}

#[async_trait::async_trait]
impl StoreClient for HttpStoreClient {
    async fn put(&self, table: &str, item: Value) -> Result<()> {
        tracing::debug!(table, "putting record to remote store");
        let response = self
            .client
            .post(self.items_url(table))
            .header(ACCESS_KEY_HEADER, &self.access_key_id)
            .header(SECRET_KEY_HEADER, &self.secret_access_key)
            .json(&item)
            .send()
            .await
            .map_err(|e| ScorebookError::store(format!("store request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    async fn scan(&self, table: &str, filter: Option<&ScanFilter>) -> Result<Vec<Value>> {
        tracing::debug!(table, filtered = filter.is_some(), "scanning remote table");
        let mut request = self
            .client
            .get(self.items_url(table))
            .header(ACCESS_KEY_HEADER, &self.access_key_id)
            .header(SECRET_KEY_HEADER, &self.secret_access_key);

        if let Some(filter) = filter {
            request = request.query(&[
                ("filterField", filter.field.as_str()),
                ("filterValue", filter.value.as_str()),
            ]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ScorebookError::store(format!("store request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let scan: ScanResponse = response
            .json()
            .await
            .map_err(|e| ScorebookError::store(format!("malformed scan response: {}", e)))?;
        Ok(scan.items)
    }
}
