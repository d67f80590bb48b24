//! Teeko client - unified CLI
//!
//! Interactive terminal play plus a few one-shot commands against the game service.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use teeko_client::{
    ClientConfig, Difficulty, RestGameClient, SessionController, SessionState, Winner,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(config).await,
        Command::State => {
            init_stderr_tracing();
            run_state(config).await
        }
        Command::AiMove => {
            init_stderr_tracing();
            run_ai_move(config).await
        }
        Command::Reset => {
            init_stderr_tracing();
            run_reset(config).await
        }
        Command::Difficulty { level } => {
            init_stderr_tracing();
            run_difficulty(config, level).await
        }
    }
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn controller(config: &ClientConfig) -> Result<SessionController<RestGameClient>> {
    let client = RestGameClient::from_config(config)?;
    Ok(SessionController::new(client))
}

/// Print the current state
#[instrument(skip_all, fields(base_url = %config.base_url()))]
async fn run_state(config: ClientConfig) -> Result<()> {
    let mut controller = controller(&config)?;
    controller.load().await?;
    if let Some(state) = controller.state() {
        println!("{}", summarize(state));
    }
    Ok(())
}

/// Request a single AI move
#[instrument(skip_all, fields(base_url = %config.base_url()))]
async fn run_ai_move(config: ClientConfig) -> Result<()> {
    let mut controller = controller(&config)?;
    controller.load().await?;
    controller.ai_move().await?;
    info!("AI move applied");
    if let Some(state) = controller.state() {
        println!("{}", summarize(state));
    }
    Ok(())
}

/// Reset the remote game
#[instrument(skip_all, fields(base_url = %config.base_url()))]
async fn run_reset(config: ClientConfig) -> Result<()> {
    let mut controller = controller(&config)?;
    controller.reset().await?;
    println!("Game reset.");
    Ok(())
}

/// Set the AI difficulty
#[instrument(skip_all, fields(base_url = %config.base_url(), difficulty = %level))]
async fn run_difficulty(config: ClientConfig, level: Difficulty) -> Result<()> {
    let mut controller = controller(&config)?;
    let completion = controller.set_difficulty(level).await?;
    info!(completion = ?completion, "Difficulty updated");
    println!("Difficulty set to {}.", level.label());
    Ok(())
}

fn summarize(state: &SessionState) -> String {
    let status = if state.is_over() {
        Winner::banner(state.winner()).to_string()
    } else {
        format!("Turn: {}  Phase: {}", state.turn(), state.phase())
    };
    format!(
        "{}\n\nYou play: {} ({} placed)   AI plays: {} ({} placed)\n{}",
        state.board(),
        state.opponent_piece(),
        state.board().count(*state.opponent_piece()),
        state.ai_piece(),
        state.board().count(state.ai_piece()),
        status
    )
}
