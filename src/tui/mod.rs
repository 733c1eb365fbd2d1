//! Terminal UI host.
//!
//! A blocking crossterm loop: draw, read one event, dispatch it to the
//! [`App`], repeat. Each handler runs to completion before the next frame.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use ui::{TITLE, draw};

use crate::config::Config;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Run the terminal game until the user quits.
pub fn run_tui(config: &Config) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = with_cleanup(enter_terminal(), restore_terminal)?;

    let mut app = App::new(*config.show_cell_numbers());
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().len() - 1, "Terminal UI closed");
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Runs `cleanup` when `result` is an error, keeping the original error.
fn with_cleanup<T>(result: Result<T>, cleanup: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Terminal setup failed");
        if let Err(cleanup_err) = cleanup() {
            warn!(error = %cleanup_err, "Failed to restore terminal");
        }
    }
    result
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cleanup_runs_on_setup_error() {
        let ran = Cell::new(false);
        let result: Result<()> = with_cleanup(Err(anyhow::anyhow!("no tty")), || {
            ran.set(true);
            Ok(())
        });
        assert!(ran.get());
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn test_cleanup_failure_keeps_setup_error() {
        let result: Result<()> = with_cleanup(Err(anyhow::anyhow!("no tty")), || {
            Err(io::Error::other("still raw"))
        });
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn test_cleanup_skipped_on_success() {
        let ran = Cell::new(false);
        let result = with_cleanup(Ok(7), || {
            ran.set(true);
            Ok(())
        });
        assert_eq!(result.unwrap(), 7);
        assert!(!ran.get());
    }
}
