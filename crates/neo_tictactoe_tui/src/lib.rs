//! Terminal front end for Neo's Tic-Tac-Toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod timer;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, PlayersConfig, TimingConfig, UiConfig};
pub use input::{Action, action_for, digit_position, move_cursor};
pub use terminal::{TerminalGuard, restore_terminal};
pub use timer::TokioTimer;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use neo_tictactoe::{Expiry, GameController};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Sends log output to `log_file` so it does not interfere with the terminal.
pub fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the game until the user quits.
pub async fn run(config: AppConfig) -> Result<()> {
    info!("Starting Neo's Tic-Tac-Toe");

    let (timer, mut expiries) = TokioTimer::channel();
    let mut controller = GameController::new(timer)
        .with_durations(config.timing().durations())
        .with_roster(config.players().roster());
    if let Some(seed) = config.ui().confetti_seed() {
        controller = controller.with_seed(*seed);
    }
    let mut app = App::new(controller);

    let mut guard = TerminalGuard::enter()?;
    let res = run_loop(guard.terminal_mut(), &mut app, &mut expiries, &config).await;
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;
    restored?;
    Ok(())
}

#[instrument(skip_all)]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<TokioTimer>,
    expiries: &mut mpsc::UnboundedReceiver<Expiry>,
    config: &AppConfig,
) -> Result<()> {
    let tick = config.ui().tick();

    loop {
        while let Ok(expiry) = expiries.try_recv() {
            app.handle_expiry(expiry);
        }

        let view = app.view();
        terminal.draw(|f| {
            ui::draw(f, &view, app.controller().roster(), app.cursor(), app.tick())
        })?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        app.on_tick();
        // Give spawned expiry timers a chance to run.
        tokio::task::yield_now().await;
    }
}
