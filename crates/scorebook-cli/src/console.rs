//! Console presenter.
//!
//! Renders users, scores, and summaries as terminal text. All values
//! arrive fully computed; this module only formats. Rendering is split
//! into line builders so the output, including the no-data indicators,
//! stays assertable without capturing stdout.

use colored::Colorize;

use scorebook_core::aggregate::{OverallSummary, Summary, UserSummary};
use scorebook_core::presenter::{Notice, Presenter};
use scorebook_core::score::Score;
use scorebook_core::user::User;

/// Terminal implementation of the presentation sink.
#[derive(Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

/// Formats a money amount the way the score table shows it: `$12.50`,
/// `$-5.00` for losses.
pub(crate) fn format_amount(value: f64) -> String {
    format!("${:.2}", value)
}

/// Formats a game date for display, e.g. `Jan 5, 2024`.
pub(crate) fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn user_list_lines(users: &[User]) -> Vec<String> {
    if users.is_empty() {
        return vec!["No users found. Add a user to get started.".to_string()];
    }
    users
        .iter()
        .map(|user| {
            if user.email.is_empty() {
                format!("{}  (id: {})", user.user_name.bold(), user.user_id)
            } else {
                format!(
                    "{} <{}>  (id: {})",
                    user.user_name.bold(),
                    user.email,
                    user.user_id
                )
            }
        })
        .collect()
}

fn score_table_lines(scores: &[Score]) -> Vec<String> {
    if scores.is_empty() {
        return vec!["No scores found. Add a score to get started.".to_string()];
    }
    let mut lines = vec![format!(
        "{:<13} {:<20} {:<20} {:>8} {:>12}",
        "Date", "Player", "Game", "Score", "Amount Won"
    )
    .bold()
    .to_string()];
    for score in scores {
        lines.push(format!(
            "{:<13} {:<20} {:<20} {:>8} {:>12}",
            format_date(score.game_date),
            score.user_name,
            score.game_name,
            score.score,
            format_amount(score.amount_won)
        ));
    }
    lines
}

fn summary_lines(summary: Option<&Summary>) -> Vec<String> {
    let Some(summary) = summary else {
        return vec!["No data available for summary.".to_string()];
    };
    vec![
        String::new(),
        "Summary".bold().to_string(),
        format!("  Total Games:      {}", summary.total_games),
        format!(
            "  Total Amount Won: {}",
            format_amount(summary.total_amount_won)
        ),
        format!(
            "  Average per Game: {}",
            format_amount(summary.average_per_game)
        ),
        format!("  Best Win:         {}", format_amount(summary.best_win)),
    ]
}

fn user_card_lines(cards: &[UserSummary], overall: Option<&OverallSummary>) -> Vec<String> {
    if cards.is_empty() {
        return vec!["No data available.".to_string()];
    }
    let mut lines = Vec::new();
    // Overall card first, matching the public view's rendering order.
    if let Some(overall) = overall {
        lines.push("Overall Statistics".bold().to_string());
        lines.push(format!("  Total Players: {}", overall.total_players));
        lines.push(format!("  Total Games:   {}", overall.total_games));
        lines.push(format!(
            "  Total Won:     {}",
            format_amount(overall.total_amount_won)
        ));
        lines.push(String::new());
    }
    for card in cards {
        lines.push(card.user_name.bold().to_string());
        lines.push(format!("  Total Games:      {}", card.total_games));
        lines.push(format!("  Total Won:        {}", format_amount(card.total_won)));
        lines.push(format!(
            "  Average per Game: {}",
            format_amount(card.average_per_game)
        ));
        lines.push(String::new());
    }
    lines
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

impl Presenter for ConsolePresenter {
    fn render_user_list(&mut self, users: &[User]) {
        print_lines(user_list_lines(users));
    }

    fn render_score_table(&mut self, scores: &[Score]) {
        print_lines(score_table_lines(scores));
    }

    fn render_summary(&mut self, summary: Option<&Summary>) {
        print_lines(summary_lines(summary));
    }

    fn render_user_cards(&mut self, cards: &[UserSummary], overall: Option<&OverallSummary>) {
        print_lines(user_card_lines(cards, overall));
    }

    fn notify(&mut self, notice: Notice, message: &str) {
        match notice {
            Notice::Success => println!("{}", message.green()),
            Notice::Error => eprintln!("{}", message.red()),
            Notice::Info => println!("{}", message.blue()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scorebook_core::score::NewScore;

    fn sample_score() -> Score {
        let input = NewScore {
            user_id: "u1".to_string(),
            game_name: "Poker".to_string(),
            amount_won: Some("25.5".to_string()),
            display_user_name: Some("Alice".to_string()),
            ..NewScore::default()
        };
        Score::record(&input, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    }

    #[test]
    fn amounts_use_two_decimals_with_dollar_prefix() {
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(-5.0), "$-5.00");
    }

    #[test]
    fn dates_render_in_short_month_form() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_date(date), "Dec 25, 2023");
    }

    #[test]
    fn empty_user_list_shows_the_no_data_indicator() {
        let lines = user_list_lines(&[]);
        assert_eq!(lines, vec!["No users found. Add a user to get started."]);
    }

    #[test]
    fn empty_score_table_shows_the_no_data_indicator() {
        let lines = score_table_lines(&[]);
        assert_eq!(lines, vec!["No scores found. Add a score to get started."]);
    }

    #[test]
    fn missing_summary_shows_the_no_data_indicator() {
        let lines = summary_lines(None);
        assert_eq!(lines, vec!["No data available for summary."]);
    }

    #[test]
    fn empty_cards_show_the_no_data_indicator() {
        let lines = user_card_lines(&[], None);
        assert_eq!(lines, vec!["No data available."]);
    }

    #[test]
    fn score_rows_carry_date_name_and_amount() {
        let lines = score_table_lines(&[sample_score()]);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Jan 5, 2024"));
        assert!(lines[1].contains("Alice"));
        assert!(lines[1].contains("$25.50"));
    }

    #[test]
    fn user_lines_include_email_only_when_present() {
        let with_email = User::new("Alice", "a@example.com");
        let without = User::new("Bob", "");
        let lines = user_list_lines(&[with_email, without]);
        assert!(lines[0].contains("<a@example.com>"));
        assert!(!lines[1].contains('<'));
    }

    #[test]
    fn overall_card_renders_before_the_per_user_cards() {
        let cards = vec![UserSummary {
            user_id: "u1".to_string(),
            user_name: "Alice".to_string(),
            total_games: 2,
            total_won: 30.0,
            average_per_game: 15.0,
        }];
        let overall = OverallSummary {
            total_players: 2,
            total_games: 3,
            total_amount_won: 35.0,
        };
        let lines = user_card_lines(&cards, Some(&overall));
        let overall_at = lines
            .iter()
            .position(|l| l.contains("Overall Statistics"))
            .unwrap();
        let alice_at = lines.iter().position(|l| l.contains("Alice")).unwrap();
        assert!(overall_at < alice_at);
        assert!(lines[overall_at + 1].contains("Total Players: 2"));
    }
}
