//! Tic-tac-toe - unified CLI
//!
//! Terminal play plus headless access to the engine.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::GameConfig;
use tictactoe::cli::{self, Cli, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { mode } => tictactoe::tui::run_tui(config.with_default_mode(mode)),
        Command::BestMove { board, mark, json } => {
            init_tracing(&config, &cli.config);
            print_report(&cli::best_move(board, mark), json)
        }
        Command::Evaluate { board, json } => {
            init_tracing(&config, &cli.config);
            print_report(&cli::evaluate_report(board), json)
        }
        Command::SelfPlay { first, json } => {
            init_tracing(&config, &cli.config);
            print_report(&cli::self_play(first), json)
        }
    }
}

/// Logs to stderr so stdout stays clean for piping.
///
/// The filter comes from the config, so the config is loaded before any
/// subscriber exists; it is reported here instead.
fn init_tracing(config: &GameConfig, path: &std::path::Path) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(path = %path.display(), found = path.exists(), ?config, "Using configuration");
}

fn print_report<T: serde::Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<()> {
    println!("{}", cli::render(report, json)?);
    Ok(())
}
