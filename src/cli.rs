//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic Tac Toe Game - a simple tic-tac-toe game with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "A simple tic-tac-toe game with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to ./rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Override the log file from the config
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Replay moves headlessly and print the resulting view
    Replay {
        /// Cells to click in order: index 0-8 or a label such as "center"
        moves: Vec<String>,

        /// Jump to this history entry after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Status, board and history as plain text
    Text,
    /// The full view as pretty-printed JSON
    Json,
}
