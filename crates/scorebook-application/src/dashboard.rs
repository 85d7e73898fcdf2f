//! Dashboard use cases.
//!
//! Orchestrates the directory and score services, runs the aggregation,
//! and pushes the computed values into a [`Presenter`]. Data flows one way:
//! nothing is cached between invocations, every view re-fetches.

use std::sync::Arc;

use scorebook_core::aggregate::{summarize, summarize_by_user, summarize_overall};
use scorebook_core::config::StoreConfig;
use scorebook_core::error::Result;
use scorebook_core::presenter::Presenter;
use scorebook_core::store::StoreClient;

use crate::directory::UserDirectory;
use crate::scores::ScoreRepository;

/// Coordinates the user directory, score repository, and aggregation for
/// one store connection.
pub struct Dashboard {
    directory: UserDirectory,
    scores: ScoreRepository,
}

impl Dashboard {
    /// Wires both services onto one store client, using the configured
    /// table names.
    pub fn new(store: Arc<dyn StoreClient>, config: &StoreConfig) -> Self {
        Self {
            directory: UserDirectory::new(store.clone(), &config.users_table),
            scores: ScoreRepository::new(store, &config.scores_table),
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn scores(&self) -> &ScoreRepository {
        &self.scores
    }

    /// Loads and renders the sorted user directory.
    pub async fn show_users(&self, presenter: &mut dyn Presenter) -> Result<()> {
        let users = self.directory.list_users().await?;
        presenter.render_user_list(&users);
        Ok(())
    }

    /// Loads and renders the score table together with the overall
    /// summary block; `None` reaches the presenter when there is no data.
    pub async fn show_scores(
        &self,
        filter_user_id: Option<&str>,
        presenter: &mut dyn Presenter,
    ) -> Result<()> {
        let scores = self.scores.list_scores(filter_user_id).await?;
        presenter.render_score_table(&scores);
        presenter.render_summary(summarize(&scores).as_ref());
        Ok(())
    }

    /// The public read-only view: per-user stat cards in first-appearance
    /// order, with the overall card only when no filter is active and more
    /// than one player is present.
    pub async fn show_public_stats(
        &self,
        filter_user_id: Option<&str>,
        presenter: &mut dyn Presenter,
    ) -> Result<()> {
        let users = self.directory.list_users().await?;
        let scores = self.scores.list_scores(filter_user_id).await?;

        let cards = summarize_by_user(&scores, &users);
        let unfiltered = filter_user_id.map_or(true, str::is_empty);
        let overall = if unfiltered && cards.len() > 1 {
            summarize_overall(&scores)
        } else {
            None
        };
        presenter.render_user_cards(&cards, overall.as_ref());
        Ok(())
    }
}
