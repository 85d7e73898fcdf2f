//! Score domain model.
//!
//! A score records one game outcome for one user. The referenced user is
//! not enforced by the store; a score may outlive or predate its user,
//! which is why the display name is denormalized onto the record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// One recorded game outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Opaque unique identifier, generated at creation.
    pub score_id: String,
    /// Reference to a user; not referentially enforced by the store.
    pub user_id: String,
    /// Denormalized copy of the user's display name at record time.
    /// Survives renames and deletions; may be empty on old records.
    #[serde(default)]
    pub user_name: String,
    /// Free-text game label, required and non-empty.
    pub game_name: String,
    /// Numeric game score; 0 when the input was unparseable.
    pub score: f64,
    /// Amount won; negative values represent a loss.
    pub amount_won: f64,
    /// Calendar date of the game, no time component.
    pub game_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw input for recording a score, before validation and coercion.
///
/// The numeric fields stay as raw text here: missing or non-numeric input
/// deliberately coerces to `0.0` rather than failing (a lenient-default
/// policy, not a validation error).
#[derive(Debug, Clone, Default)]
pub struct NewScore {
    pub user_id: String,
    pub game_name: String,
    pub score_value: Option<String>,
    pub amount_won: Option<String>,
    pub game_date: Option<NaiveDate>,
    pub display_user_name: Option<String>,
}

impl Score {
    /// Builds a persisted score from validated input, stamping the id and
    /// both timestamps. Numeric fields are coerced with [`parse_amount`].
    pub fn record(input: &NewScore, game_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            score_id: generate_id(),
            user_id: input.user_id.clone(),
            user_name: input.display_user_name.clone().unwrap_or_default(),
            game_name: input.game_name.trim().to_string(),
            score: parse_amount(input.score_value.as_deref()),
            amount_won: parse_amount(input.amount_won.as_deref()),
            game_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Parses a numeric form field leniently.
///
/// Missing, empty, or non-numeric input yields `0.0`. Never an error.
pub fn parse_amount(input: Option<&str>) -> f64 {
    input
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}
