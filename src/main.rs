//! Rewind - tic-tac-toe with a time-travel move history.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use rewind::{Config, GameView, render_text, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => {
            let config = match log_file {
                Some(path) => config.with_log_file(path),
                None => config,
            };
            run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            format,
        } => run_replay(&config, &moves, jump, format),
    }
}

/// Replay moves and print the resulting view to stdout.
fn run_replay(
    config: &Config,
    moves: &[String],
    jump: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = moves.len(), "Replaying moves");
    let game = replay(moves, jump)?;
    let view = GameView::of(&game);

    match format {
        OutputFormat::Text => print!("{}", render_text(&view, *config.show_cell_numbers())),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize view")?
        ),
    }
    Ok(())
}
