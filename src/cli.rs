use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::analytics::dashboard;
use crate::config::Config;
use crate::data::Dataset;
use crate::engine::matching::run_match;
use crate::error::AppError;
use crate::observability::init_tracing;
use crate::server;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(
    name = "fleet-matcher",
    about = "Match logistics orders to available vehicles and report fleet metrics",
    version
)]
struct Cli {
    /// Directory holding the logistics CSV tables (overrides DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank available vehicles for one order and print the report as JSON
    Match(MatchArgs),
    /// Print the operations dashboard summary as JSON
    Dashboard,
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Order identifier to match
    #[arg(long)]
    order: String,
    /// Minimum match score (0-100); defaults to DEFAULT_MIN_SCORE
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    init_tracing(&config.log_level, config.log_format);

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => {
            if let Some(port) = args.port {
                config.http_port = port;
            }
            server::run(config).await
        }
        Command::Match(args) => {
            let state = offline_state(&config)?;
            let min_score = args.min_score.unwrap_or(config.default_min_score);
            let report = run_match(&state, &args.order, min_score)?;
            print_json(&report)
        }
        Command::Dashboard => {
            let dataset = Dataset::load(&config.data_dir)?;
            print_json(&dashboard::summarize(&dataset))
        }
    }
}

fn offline_state(config: &Config) -> Result<AppState, AppError> {
    let dataset = Dataset::load(&config.data_dir)?;
    Ok(AppState::new(
        dataset,
        config.default_min_score,
        config.event_buffer_size,
    ))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Internal(format!("failed to serialize output: {err}")))?;
    println!("{json}");
    Ok(())
}
