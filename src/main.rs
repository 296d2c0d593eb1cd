//! kanban - A terminal Kanban board with drag-and-drop cards.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use kanban_config::Config;
use kanban_protocol::seed::seed_board;
use kanban_tui::{App, terminal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A broken config file should not keep the board from opening
    let (config, config_error) = match Config::load().await {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {err:#}");
    }
    if let Some(err) = config_error {
        eprintln!("Warning: using default configuration: {err}");
        warn!(error = %err, "failed to load configuration");
    }
    info!(mouse = config.input.mouse, "starting kanban");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal(config.input.mouse)?;

    let mut app = App::with_config(seed_board(), config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
