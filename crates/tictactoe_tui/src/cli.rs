//! Command-line interface for the tic-tac-toe terminal game.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::MovePolicy;

/// Two-player tic-tac-toe in the terminal. Click a cell or use the keyboard.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Move policy: "permissive" or "stop-at-game-over"
    #[arg(short, long)]
    pub policy: Option<MovePolicy>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show the snapshot as JSON on startup
    #[arg(long)]
    pub show_json: bool,
}

impl Cli {
    /// Resolves the effective settings: config file first, flags on top.
    pub fn settings(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };

        if let Some(policy) = self.policy {
            config = config.with_policy(policy);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.show_json {
            config = config.with_show_json(true);
        }

        Ok(config)
    }
}
