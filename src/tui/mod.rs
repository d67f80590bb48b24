//! Terminal UI for the Teeko client

mod app;
mod input;
mod screen;
mod screens;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use teeko_client::{ClientConfig, GameService, RestGameClient};
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use app::{App, Flow};

/// Run the TUI client
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(base_url = %config.base_url(), "Starting Teeko TUI");

    let client = Arc::new(RestGameClient::from_config(&config)?);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(client)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }

    res
}

/// Draw, apply finished requests, handle one key; repeat until quit.
#[instrument(skip_all)]
async fn run_app<S: GameService + 'static>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.drain_outcomes();
        terminal.draw(|f| app.render(f))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == Flow::Quit {
                return Ok(());
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
