use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use scorebook_core::presenter::{Notice, Presenter};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;

use console::ConsolePresenter;

#[derive(Parser)]
#[command(name = "scorebook")]
#[command(about = "Scorebook - score tracking over a managed key-value store", long_about = None)]
struct Cli {
    /// Use a local JSON table store instead of the remote store, rooted
    /// at DIR or, without a value, at the platform data directory
    #[arg(long, global = true, value_name = "DIR", num_args = 0..=1)]
    local: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or save store configuration profiles
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Add and list users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Record and list scores
    Score {
        #[command(subcommand)]
        action: ScoreAction,
    },
    /// Aggregated per-player statistics (read-only public view)
    Stats {
        /// Restrict to a single user id
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the stored configuration (credentials masked)
    Show {
        /// Use the public read-only profile
        #[arg(long)]
        public: bool,
    },
    /// Save a configuration profile
    Set {
        #[arg(long)]
        region: String,
        #[arg(long)]
        access_key_id: String,
        #[arg(long)]
        secret_access_key: String,
        #[arg(long)]
        users_table: Option<String>,
        #[arg(long)]
        scores_table: Option<String>,
        /// Save to the public read-only profile
        #[arg(long)]
        public: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Add a user
    Add {
        name: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// List users sorted by name
    List,
}

#[derive(Subcommand)]
enum ScoreAction {
    /// Record a score
    Add {
        /// User id the score belongs to
        #[arg(long)]
        user: String,
        /// Game name
        #[arg(long)]
        game: String,
        /// Game score; non-numeric input is stored as 0
        #[arg(long)]
        score: Option<String>,
        /// Amount won (negative for a loss); non-numeric input is stored as 0
        #[arg(long)]
        won: Option<String>,
        /// Game date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List scores, most recent first, with the summary block
    List {
        /// Restrict to a single user id
        #[arg(long)]
        user: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut presenter = ConsolePresenter::new();

    if let Err(err) = run(cli, &mut presenter).await {
        presenter.notify(Notice::Error, &format!("Error: {}", err));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, presenter: &mut ConsolePresenter) -> Result<()> {
    let local = cli.local.as_ref().map(|dir| dir.as_deref());

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show { public } => commands::config::show(public).await?,
            ConfigAction::Set {
                region,
                access_key_id,
                secret_access_key,
                users_table,
                scores_table,
                public,
            } => {
                commands::config::set(
                    public,
                    region,
                    access_key_id,
                    secret_access_key,
                    users_table,
                    scores_table,
                    presenter,
                )
                .await?
            }
        },
        Commands::User { action } => match action {
            UserAction::Add { name, email } => {
                commands::user::add(local, &name, email.as_deref(), presenter).await?
            }
            UserAction::List => commands::user::list(local, presenter).await?,
        },
        Commands::Score { action } => match action {
            ScoreAction::Add {
                user,
                game,
                score,
                won,
                date,
            } => commands::score::add(local, &user, &game, score, won, date, presenter).await?,
            ScoreAction::List { user } => {
                commands::score::list(local, user.as_deref(), presenter).await?
            }
        },
        Commands::Stats { user } => {
            commands::stats::show(local, user.as_deref(), presenter).await?
        }
    }

    Ok(())
}
