//! `scorebook config` subcommands.

use anyhow::Result;

use scorebook_core::config::{ConfigProfile, StoreConfig};
use scorebook_core::presenter::{Notice, Presenter};
use scorebook_infrastructure::ConfigService;

use super::load_config;

fn profile_for(public: bool) -> ConfigProfile {
    if public {
        ConfigProfile::Public
    } else {
        ConfigProfile::Admin
    }
}

fn masked(secret: &str) -> &'static str {
    if secret.is_empty() { "(not set)" } else { "(set)" }
}

/// Prints a configuration profile with credentials masked.
pub async fn show(public: bool) -> Result<()> {
    let profile = profile_for(public);
    let config = load_config(profile).await?;

    println!("profile:            {}", profile.file_name());
    println!("region:             {}", config.region);
    println!("access key id:      {}", masked(&config.access_key_id));
    println!("secret access key:  {}", masked(&config.secret_access_key));
    println!("users table:        {}", config.users_table);
    println!("scores table:       {}", config.scores_table);
    Ok(())
}

/// Saves a configuration profile wholesale.
#[allow(clippy::too_many_arguments)]
pub async fn set(
    public: bool,
    region: String,
    access_key_id: String,
    secret_access_key: String,
    users_table: Option<String>,
    scores_table: Option<String>,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let defaults = StoreConfig::default();
    let config = StoreConfig {
        region,
        access_key_id,
        secret_access_key,
        users_table: users_table.unwrap_or(defaults.users_table),
        scores_table: scores_table.unwrap_or(defaults.scores_table),
    };

    ConfigService::new()?
        .save(profile_for(public), &config)
        .await?;
    presenter.notify(Notice::Success, "Configuration saved successfully!");
    Ok(())
}
