//! Configuration persistence.
//!
//! Loads and saves the two store configuration profiles as TOML files under
//! the configuration directory. A missing file yields the defaults; saving
//! replaces the whole record.

use std::path::PathBuf;

use tokio::fs;

use scorebook_core::config::{ConfigProfile, StoreConfig};
use scorebook_core::error::{Result, ScorebookError};

use crate::paths::ScorebookPaths;

/// Loads and saves [`StoreConfig`] profiles.
pub struct ConfigService {
    config_dir: PathBuf,
}

impl ConfigService {
    /// Creates a service using the platform configuration directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_dir: ScorebookPaths::config_dir()?,
        })
    }

    /// Creates a service rooted at a custom directory (for testing).
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn profile_path(&self, profile: ConfigProfile) -> PathBuf {
        self.config_dir.join(profile.file_name())
    }

    /// Loads a profile, falling back to defaults when the file is absent.
    pub async fn load(&self, profile: ConfigProfile) -> Result<StoreConfig> {
        let path = self.profile_path(profile);
        if !path.exists() {
            tracing::debug!(?path, "config profile missing, using defaults");
            return Ok(StoreConfig::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| ScorebookError::io(format!("Failed to read config profile: {}", e)))?;
        let config: StoreConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves a profile, replacing the stored record wholesale.
    ///
    /// Fails with a `Config` error when region or either credential field
    /// is empty, matching the form-level check of the original surface.
    pub async fn save(&self, profile: ConfigProfile, config: &StoreConfig) -> Result<()> {
        if !config.is_configured() {
            return Err(ScorebookError::config(
                "region, access key id, and secret access key are all required",
            ));
        }

        fs::create_dir_all(&self.config_dir)
            .await
            .map_err(|e| ScorebookError::io(format!("Failed to create config directory: {}", e)))?;

        let serialized = toml::to_string_pretty(config)?;
        let path = self.profile_path(profile);
        fs::write(&path, serialized)
            .await
            .map_err(|e| ScorebookError::io(format!("Failed to write config profile: {}", e)))?;

        tracing::info!(?path, "saved store configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn configured() -> StoreConfig {
        StoreConfig {
            region: "eu-west-1".to_string(),
            access_key_id: "AKIA123".to_string(),
            secret_access_key: "secret".to_string(),
            ..StoreConfig::default()
        }
    }

    #[tokio::test]
    async fn load_returns_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_config_dir(temp_dir.path().to_path_buf());

        let config = service.load(ConfigProfile::Admin).await.unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[tokio::test]
    async fn save_and_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_config_dir(temp_dir.path().to_path_buf());

        let config = configured();
        service.save(ConfigProfile::Admin, &config).await.unwrap();

        let loaded = service.load(ConfigProfile::Admin).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn profiles_are_stored_separately() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_config_dir(temp_dir.path().to_path_buf());

        let admin = configured();
        service.save(ConfigProfile::Admin, &admin).await.unwrap();

        // The public profile stays on defaults until saved itself.
        let public = service.load(ConfigProfile::Public).await.unwrap();
        assert_eq!(public, StoreConfig::default());
    }

    #[tokio::test]
    async fn save_rejects_incomplete_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_config_dir(temp_dir.path().to_path_buf());

        let err = service
            .save(ConfigProfile::Admin, &StoreConfig::default())
            .await
            .unwrap_err();
        assert!(err.is_config());
        assert!(!temp_dir.path().join("config.toml").exists());
    }
}
