//! `scorebook stats` subcommand: the read-only public view.
//!
//! Uses the separately keyed public profile, which is expected to carry
//! credentials restricted to read operations.

use anyhow::Result;

use scorebook_core::config::ConfigProfile;
use scorebook_core::presenter::Presenter;

use super::{connect, LocalStore};

/// Renders aggregated per-user stat cards, plus the overall card when no
/// filter is active and more than one player is present.
pub async fn show(
    local: LocalStore<'_>,
    user_id: Option<&str>,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let board = connect(ConfigProfile::Public, local).await?;
    board.show_public_stats(user_id, presenter).await?;
    Ok(())
}
