//! Two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe_tui::{Cli, TuiConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.settings()?;

    init_tracing(&config)?;
    info!(log_file = %config.log_file().display(), "Logging initialized");

    tictactoe_tui::run(&config)
}

/// Sends tracing output to the configured file so it does not fight the TUI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
