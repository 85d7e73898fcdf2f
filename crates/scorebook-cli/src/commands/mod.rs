//! CLI command implementations.

pub mod config;
pub mod score;
pub mod stats;
pub mod user;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use scorebook_application::Dashboard;
use scorebook_core::config::{ConfigProfile, StoreConfig};
use scorebook_core::store::StoreClient;
use scorebook_infrastructure::{ConfigService, DirTableStore, HttpStoreClient};

/// Which local table store `--local` selected, if any: an explicit base
/// directory, or the platform default when the flag carried no value.
pub(crate) type LocalStore<'a> = Option<Option<&'a Path>>;

/// Loads the requested profile and wires a dashboard onto the matching
/// store backend (remote by default, local JSON tables with `--local`).
pub(crate) async fn connect(profile: ConfigProfile, local: LocalStore<'_>) -> Result<Dashboard> {
    let config = load_config(profile).await?;
    let store: Arc<dyn StoreClient> = match local {
        Some(Some(dir)) => Arc::new(DirTableStore::with_base_path(dir.to_path_buf())),
        Some(None) => Arc::new(DirTableStore::new()?),
        None => Arc::new(HttpStoreClient::from_config(&config)?),
    };
    Ok(Dashboard::new(store, &config))
}

pub(crate) async fn load_config(profile: ConfigProfile) -> Result<StoreConfig> {
    Ok(ConfigService::new()?.load(profile).await?)
}
