//! FilmFlow command line dashboard.
//!
//! Loads a production's budget or timeline from the dashboard backend (or
//! the built-in demo data) and prints its analytics.

mod commands;
mod render;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filmflow_client::ClientError;
use filmflow_shared::{AppConfig, AppError};

use crate::commands::Context;

#[derive(Parser)]
#[command(
    name = "filmflow",
    version,
    about = "Budget and timeline analytics for film productions"
)]
struct Cli {
    /// Access token for the dashboard backend
    #[arg(long, global = true, env = "FILMFLOW_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Where the data comes from and how it is printed.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Backend project ID
    #[arg(short, long, conflicts_with = "demo", required_unless_present = "demo")]
    project: Option<String>,

    /// Use the built-in demo production instead of the backend
    #[arg(long)]
    demo: bool,

    /// Print JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show budget analytics, forecast and per-category breakdown
    Budget {
        #[command(flatten)]
        source: SourceArgs,

        /// Forecast horizon in days (1-3650)
        #[arg(
            short,
            long,
            default_value = "30",
            value_parser = clap::value_parser!(u32).range(1..=3650)
        )]
        forecast_days: u32,
    },

    /// Show task progress, milestones and highlighted tasks
    Timeline {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filmflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = classify(&err).error_code();
            error!(code, error = %format!("{err:#}"), "Command failed");
            eprintln!("error[{code}]: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = AppConfig::load().map_err(AppError::from)?;
    let context = Context::new(config, cli.token, chrono::Utc::now());

    match cli.command {
        Commands::Budget {
            source,
            forecast_days,
        } => commands::budget(&context, &source, forecast_days).await,
        Commands::Timeline { source } => commands::timeline(&context, &source).await,
    }
}

/// Maps a command failure onto the shared error taxonomy.
fn classify(err: &anyhow::Error) -> AppError {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return app.clone();
    }
    if let Some(client) = err.downcast_ref::<ClientError>() {
        return AppError::from(client);
    }
    AppError::Internal(err.to_string())
}
