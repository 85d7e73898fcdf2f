//! Score repository service.
//!
//! Creates score records and owns the filtered, date-sorted listing. The
//! single-user filter is delegated to the store client; the sort happens
//! here because scan order is store-defined.

use std::sync::Arc;

use scorebook_core::error::{Result, ScorebookError};
use scorebook_core::score::{NewScore, Score};
use scorebook_core::store::{ScanFilter, StoreClient};

use crate::records::deserialize_rows;

/// Service over the scores table.
pub struct ScoreRepository {
    store: Arc<dyn StoreClient>,
    table: String,
}

impl ScoreRepository {
    pub fn new(store: Arc<dyn StoreClient>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    /// Validates the input and persists a new score record.
    ///
    /// A missing user, blank game name, or missing date is a `Validation`
    /// error with no write. Unparseable numeric input is NOT an error: it
    /// coerces to `0.0` on the stored record.
    pub async fn add_score(&self, input: NewScore) -> Result<Score> {
        if input.user_id.trim().is_empty() {
            return Err(ScorebookError::validation("Please select a user"));
        }
        if input.game_name.trim().is_empty() {
            return Err(ScorebookError::validation("Please enter a game name"));
        }
        let game_date = input
            .game_date
            .ok_or_else(|| ScorebookError::validation("Please select a date"))?;

        let score = Score::record(&input, game_date);
        self.store
            .put(&self.table, serde_json::to_value(&score)?)
            .await?;
        tracing::info!(score_id = %score.score_id, user_id = %score.user_id, "added score");
        Ok(score)
    }

    /// Returns scores, optionally restricted to one user, sorted
    /// descending by game date.
    ///
    /// The sort is stable: same-date records keep their fetch order, which
    /// keeps output reproducible for a given scan result.
    pub async fn list_scores(&self, filter_user_id: Option<&str>) -> Result<Vec<Score>> {
        let filter = filter_user_id
            .filter(|id| !id.is_empty())
            .map(ScanFilter::user_id);
        let items = self.store.scan(&self.table, filter.as_ref()).await?;
        let mut scores: Vec<Score> = deserialize_rows(items, "score");
        scores.sort_by(|a, b| b.game_date.cmp(&a.game_date));
        Ok(scores)
    }
}
