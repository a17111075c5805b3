//! Tic-tac-toe on the console.
//!
//! Plays one game between two people taking turns at the same terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_console::{ConsoleConfig, LineChannel, Orchestrator};
use tictactoe_engine::Game;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(load_config(&cli)?);
    initialize_tracing(&cli, &config);

    eprintln!("TickTackToe game");
    run_game(&config)
}

fn load_config(cli: &Cli) -> Result<ConsoleConfig> {
    match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => Ok(ConsoleConfig::default()),
    }
}

/// Logs go to stderr so stdout carries only the game transcript.
///
/// `--log-filter` has already been merged into `config` and beats `RUST_LOG`.
fn initialize_tracing(cli: &Cli, config: &ConsoleConfig) {
    let filter = if cli.log_filter.is_some() {
        EnvFilter::new(config.log_filter())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all, fields(max_read_failures = ?config.max_read_failures()))]
fn run_game(config: &ConsoleConfig) -> Result<()> {
    let mut orchestrator = Orchestrator::new(Game::new(), LineChannel::stdio())
        .with_max_read_failures(*config.max_read_failures());

    let status = orchestrator.run()?;
    info!(%status, "Exiting");
    Ok(())
}
