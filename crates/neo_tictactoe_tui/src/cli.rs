//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Neo's Tic-Tac-Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "neo_tictactoe")]
#[command(about = "Two-player tic-tac-toe with animated feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./neo_tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long, default_value = "neo_tictactoe.log")]
    pub log_file: PathBuf,
}
