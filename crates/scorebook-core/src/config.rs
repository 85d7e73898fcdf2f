//! Store connection configuration.
//!
//! The configuration record is loaded once at startup, threaded into the
//! store client constructor, and replaced wholesale on save. There is no
//! process-wide mutable configuration state.

use serde::{Deserialize, Serialize};

/// Which persisted configuration profile to use.
///
/// The admin profile carries read-write credentials; the public profile is
/// a separately keyed record expected to hold read-only credentials for the
/// aggregated stats view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProfile {
    Admin,
    Public,
}

impl ConfigProfile {
    /// File name of the profile under the configuration directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigProfile::Admin => "config.toml",
            ConfigProfile::Public => "public.toml",
        }
    }
}

/// Connection settings for the managed key-value store.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub secret_access_key: String,
    #[serde(default = "default_users_table")]
    pub users_table: String,
    #[serde(default = "default_scores_table")]
    pub scores_table: String,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_users_table() -> String {
    "score-tracker-users".to_string()
}

fn default_scores_table() -> String {
    "score-tracker-scores".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            users_table: default_users_table(),
            scores_table: default_scores_table(),
        }
    }
}

impl StoreConfig {
    /// Returns true when region and both credential fields are present.
    pub fn is_configured(&self) -> bool {
        !self.region.is_empty()
            && !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
    }
}
