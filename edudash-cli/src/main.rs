//! # EduDash CLI
//!
//! Terminal admin console for the learning platform. Talks to the
//! platform's REST API and renders the dashboard views as text: headline
//! counts, analytics breakdowns, community moderation with search and
//! sort, and the user/content administration commands.
//!
//! ## Usage
//!
//! ```bash
//! EDUDASH_API_URL=http://localhost:8000/api \
//! EDUDASH_TOKEN=... \
//! cargo run -p edudash-cli -- overview
//! ```

mod cli;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use edudash_client::ApiClient;
use edudash_core::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edudash=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    let config = Config::from_env()?;
    let client = ApiClient::from_config(&config)?;

    // Admin gate: every command below assumes an admin session
    let profile = client
        .require_admin()
        .await
        .context("verifying admin access")?;
    tracing::debug!("signed in as {}", profile.username);

    match args.command {
        Command::Overview => commands::overview(&client).await,
        Command::Analytics => commands::analytics(&client).await,
        Command::Community(community) => commands::community(&client, community).await,
        Command::Users(command) => commands::users(&client, command).await,
        Command::Paths(command) => commands::paths(&client, command).await,
        Command::Modules(command) => commands::modules(&client, command).await,
        Command::Quizzes(command) => commands::quizzes(&client, command).await,
        Command::Projects => commands::projects(&client).await,
    }
}
