//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_console::ConsoleConfig;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracing filter (overrides RUST_LOG and the config file)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Stop after this many consecutive failed reads of one coordinate
    #[arg(long)]
    pub max_read_failures: Option<u32>,
}

impl Cli {
    /// Applies flags given on the command line on top of `config`.
    pub fn apply(&self, mut config: ConsoleConfig) -> ConsoleConfig {
        if let Some(directive) = &self.log_filter {
            config = config.with_log_filter(directive.clone());
        }
        if let Some(limit) = self.max_read_failures {
            config = config.with_max_read_failures(Some(limit));
        }
        config
    }
}
