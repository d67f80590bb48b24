//! Command-line interface for teeko_client.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use teeko_client::{ClientConfig, ConfigError, Difficulty};

/// Teeko client - play Teeko against a remote AI
#[derive(Parser, Debug)]
#[command(name = "teeko_client")]
#[command(about = "Play Teeko against a remote AI game service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Game service URL (overrides config and TEEKO_BACKEND_URL)
    #[arg(long, global = true)]
    pub server_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the current game state
    State,

    /// Ask the AI to make its move
    AiMove,

    /// Reset the remote game
    Reset,

    /// Set the AI difficulty
    Difficulty {
        /// beginner, intermediate or expert
        level: Difficulty,
    },
}

impl Cli {
    /// Resolves configuration: file, then environment, then flags.
    pub fn resolve_config(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = ClientConfig::load(self.config.as_deref())?;
        if let Some(url) = &self.server_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        config.validate()?;
        Ok(config)
    }
}
