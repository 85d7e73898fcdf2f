//! Unified path management for scorebook configuration and data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/scorebook/         # Config directory
//! ├── config.toml              # Admin profile (read-write credentials)
//! └── public.toml              # Public profile (read-only credentials)
//!
//! ~/.local/share/scorebook/    # Data directory
//! └── tables/                  # Local JSON table store (DirTableStore)
//! ```

use std::path::PathBuf;

use scorebook_core::error::{Result, ScorebookError};

/// Unified path resolution for scorebook.
pub struct ScorebookPaths;

impl ScorebookPaths {
    const APP_DIR: &'static str = "scorebook";

    /// Returns the scorebook configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/scorebook/`
    /// - `Err(ScorebookError::Config)`: home directory could not be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or_else(|| ScorebookError::config("Cannot find config directory"))
    }

    /// Returns the scorebook data directory, used for the local table store.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or_else(|| ScorebookError::config("Cannot find data directory"))
    }

    /// Returns the base directory for the local JSON table store.
    pub fn tables_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("tables"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_dir_sits_under_the_platform_data_dir() {
        let tables = ScorebookPaths::tables_dir().unwrap();
        assert!(tables.ends_with("scorebook/tables"));
        assert!(tables.starts_with(dirs::data_dir().unwrap()));
    }

    #[test]
    fn config_dir_is_app_scoped() {
        let config = ScorebookPaths::config_dir().unwrap();
        assert!(config.ends_with("scorebook"));
    }
}
