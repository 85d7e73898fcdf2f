//! `scorebook user` subcommands.

use anyhow::Result;

use scorebook_core::config::ConfigProfile;
use scorebook_core::presenter::{Notice, Presenter};

use super::{connect, LocalStore};

/// Adds a user to the directory.
pub async fn add(
    local: LocalStore<'_>,
    name: &str,
    email: Option<&str>,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let board = connect(ConfigProfile::Admin, local).await?;
    let user = board.directory().add_user(name, email).await?;
    presenter.notify(
        Notice::Success,
        &format!("User \"{}\" added successfully!", user.user_name),
    );
    Ok(())
}

/// Lists users sorted by display name.
pub async fn list(local: LocalStore<'_>, presenter: &mut dyn Presenter) -> Result<()> {
    let board = connect(ConfigProfile::Admin, local).await?;
    board.show_users(presenter).await?;
    Ok(())
}
