//! `scorebook score` subcommands.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use scorebook_core::config::ConfigProfile;
use scorebook_core::presenter::{Notice, Presenter};
use scorebook_core::score::NewScore;
use scorebook_core::user::name_of;

use super::{connect, LocalStore};

/// Records a score for a user.
///
/// The date defaults to today. The user's display name is captured from
/// the directory at write time; a dangling user id is allowed (the store
/// does not enforce the reference) and simply stores an empty name.
pub async fn add(
    local: LocalStore<'_>,
    user_id: &str,
    game: &str,
    score: Option<String>,
    won: Option<String>,
    date: Option<NaiveDate>,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let board = connect(ConfigProfile::Admin, local).await?;

    let users = board.directory().list_users().await?;
    let display_user_name = name_of(&users, user_id).map(str::to_string);

    board
        .scores()
        .add_score(NewScore {
            user_id: user_id.to_string(),
            game_name: game.to_string(),
            score_value: score,
            amount_won: won,
            game_date: Some(date.unwrap_or_else(|| Local::now().date_naive())),
            display_user_name,
        })
        .await?;
    presenter.notify(Notice::Success, "Score added successfully!");
    Ok(())
}

/// Lists scores (optionally one user's), most recent first, with the
/// overall summary block.
pub async fn list(
    local: LocalStore<'_>,
    user_id: Option<&str>,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let board = connect(ConfigProfile::Admin, local).await?;
    board.show_scores(user_id, presenter).await?;
    Ok(())
}
