//! Score aggregation.
//!
//! Pure functions over fetched score records: no I/O, referentially
//! transparent given their input. Empty input is modelled as `None` so the
//! divide-by-zero case is unrepresentable and callers render an explicit
//! "no data" indicator instead.

use std::collections::HashMap;

use crate::score::Score;
use crate::user::{name_of, User};

/// Placeholder display name when neither the record nor the directory
/// knows the user.
pub const UNKNOWN_USER: &str = "Unknown";

/// Overall totals across a score listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_games: usize,
    pub total_amount_won: f64,
    pub average_per_game: f64,
    pub best_win: f64,
}

/// Per-user totals for the aggregated stats cards.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub user_id: String,
    pub user_name: String,
    pub total_games: usize,
    pub total_won: f64,
    pub average_per_game: f64,
}

/// Cross-player totals, rendered only when more than one player is present
/// and no single-user filter is active.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallSummary {
    pub total_players: usize,
    pub total_games: usize,
    pub total_amount_won: f64,
}

/// Computes overall totals for a score listing.
///
/// Returns `None` on empty input; `average_per_game` and `best_win` have
/// no meaning there and the caller short-circuits to its no-data view.
pub fn summarize(scores: &[Score]) -> Option<Summary> {
    if scores.is_empty() {
        return None;
    }
    let total_games = scores.len();
    let total_amount_won: f64 = scores.iter().map(|s| s.amount_won).sum();
    let best_win = scores
        .iter()
        .map(|s| s.amount_won)
        .fold(f64::NEG_INFINITY, f64::max);
    Some(Summary {
        total_games,
        total_amount_won,
        average_per_game: total_amount_won / total_games as f64,
        best_win,
    })
}

/// Groups scores by user and totals each group.
///
/// Output order is the first-appearance order of each `user_id` in the
/// input, which keeps card rendering deterministic. The display name is
/// fixed when a user's first score is seen, via [`resolve_user_name`].
pub fn summarize_by_user(scores: &[Score], users: &[User]) -> Vec<UserSummary> {
    let mut stats: Vec<UserSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for score in scores {
        let slot = match index.get(score.user_id.as_str()) {
            Some(&i) => i,
            None => {
                stats.push(UserSummary {
                    user_id: score.user_id.clone(),
                    user_name: resolve_user_name(score, users),
                    total_games: 0,
                    total_won: 0.0,
                    average_per_game: 0.0,
                });
                index.insert(score.user_id.as_str(), stats.len() - 1);
                stats.len() - 1
            }
        };
        stats[slot].total_games += 1;
        stats[slot].total_won += score.amount_won;
    }

    for stat in &mut stats {
        // total_games >= 1 for every entry by construction
        stat.average_per_game = stat.total_won / stat.total_games as f64;
    }
    stats
}

/// Computes cross-player totals, `None` on empty input.
pub fn summarize_overall(scores: &[Score]) -> Option<OverallSummary> {
    if scores.is_empty() {
        return None;
    }
    let mut players: Vec<&str> = scores.iter().map(|s| s.user_id.as_str()).collect();
    players.sort_unstable();
    players.dedup();
    Some(OverallSummary {
        total_players: players.len(),
        total_games: scores.len(),
        total_amount_won: scores.iter().map(|s| s.amount_won).sum(),
    })
}

/// Resolves the display name for a score record.
///
/// Three-tier chain: the record's own denormalized name when non-empty,
/// then a directory lookup by id, then the `"Unknown"` placeholder.
pub fn resolve_user_name(score: &Score, users: &[User]) -> String {
    if !score.user_name.is_empty() {
        return score.user_name.clone();
    }
    name_of(users, &score.user_id)
        .unwrap_or(UNKNOWN_USER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::NewScore;
    use chrono::NaiveDate;

    fn score(user_id: &str, user_name: &str, amount_won: f64) -> Score {
        let input = NewScore {
            user_id: user_id.to_string(),
            game_name: "Poker".to_string(),
            amount_won: Some(amount_won.to_string()),
            display_user_name: Some(user_name.to_string()),
            ..NewScore::default()
        };
        Score::record(&input, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn summarize_counts_sums_and_maxes() {
        let scores = vec![
            score("u1", "Alice", 10.0),
            score("u1", "Alice", -4.0),
            score("u2", "Bob", 25.0),
        ];
        let summary = summarize(&scores).unwrap();
        assert_eq!(summary.total_games, 3);
        assert!((summary.total_amount_won - 31.0).abs() < 1e-9);
        assert!((summary.average_per_game - 31.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.best_win, 25.0);
    }

    #[test]
    fn summarize_handles_all_negative_amounts() {
        let scores = vec![score("u1", "Alice", -10.0), score("u1", "Alice", -2.5)];
        let summary = summarize(&scores).unwrap();
        assert_eq!(summary.best_win, -2.5);
        assert!(summary.total_amount_won < 0.0);
    }

    #[test]
    fn summarize_is_none_on_empty_input() {
        assert_eq!(summarize(&[]), None);
        assert_eq!(summarize_overall(&[]), None);
        assert!(summarize_by_user(&[], &[]).is_empty());
    }

    #[test]
    fn summarize_by_user_groups_and_averages() {
        let scores = vec![
            score("u1", "Alice", 10.0),
            score("u1", "Alice", 20.0),
            score("u2", "Bob", 5.0),
        ];
        let stats = summarize_by_user(&scores, &[]);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].user_id, "u1");
        assert_eq!(stats[0].total_games, 2);
        assert!((stats[0].total_won - 30.0).abs() < 1e-9);
        assert!((stats[0].average_per_game - 15.0).abs() < 1e-9);
        assert_eq!(stats[1].user_id, "u2");
        assert_eq!(stats[1].total_games, 1);
        assert!((stats[1].total_won - 5.0).abs() < 1e-9);
        assert!((stats[1].average_per_game - 5.0).abs() < 1e-9);
    }

    #[test]
    fn summarize_by_user_preserves_first_appearance_order() {
        let scores = vec![
            score("u2", "Bob", 1.0),
            score("u1", "Alice", 1.0),
            score("u2", "Bob", 1.0),
            score("u3", "Cara", 1.0),
        ];
        let stats = summarize_by_user(&scores, &[]);
        let ids: Vec<&str> = stats.iter().map(|s| s.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u2", "u1", "u3"]);
    }

    #[test]
    fn summarize_overall_counts_distinct_players() {
        let scores = vec![
            score("u1", "Alice", 10.0),
            score("u2", "Bob", 5.0),
            score("u1", "Alice", 2.0),
        ];
        let overall = summarize_overall(&scores).unwrap();
        assert_eq!(overall.total_players, 2);
        assert_eq!(overall.total_games, 3);
        assert!((overall.total_amount_won - 17.0).abs() < 1e-9);
    }

    #[test]
    fn name_resolution_prefers_the_denormalized_copy() {
        let users = vec![User::new("Directory Alice", "")];
        let mut s = score(&users[0].user_id, "Record Alice", 1.0);
        assert_eq!(resolve_user_name(&s, &users), "Record Alice");

        s.user_name = String::new();
        assert_eq!(resolve_user_name(&s, &users), "Directory Alice");

        s.user_id = "nobody".to_string();
        assert_eq!(resolve_user_name(&s, &users), UNKNOWN_USER);
    }

    #[test]
    fn grouped_name_is_fixed_at_first_appearance() {
        let first = score("u1", "", 1.0);
        let second = score("u1", "Late Name", 1.0);
        let stats = summarize_by_user(&[first, second], &[]);
        assert_eq!(stats[0].user_name, UNKNOWN_USER);
    }
}
