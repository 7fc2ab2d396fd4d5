//! Neo's Tic-Tac-Toe terminal binary.

use anyhow::Result;
use clap::Parser;
use neo_tictactoe_tui::{AppConfig, Cli, init_tracing, run};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let config = AppConfig::load(cli.config.as_deref())?;
    run(config).await
}
