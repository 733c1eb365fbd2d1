//! Rewind - tic-tac-toe with a time-travel move history.
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate hosts it.
//!
//! # Architecture
//!
//! - **Config**: optional `rewind.toml` for logging and display settings
//! - **Render**: plain-text rendering of a [`GameView`]
//! - **Replay**: headless click sequences for scripting and tests
//! - **Tui**: interactive terminal front end
//!
//! # Example
//!
//! ```
//! use rewind::{GameHistory, GameView, Position, render_text};
//!
//! let mut game = GameHistory::new();
//! game.click(Position::Center).unwrap();
//! let text = render_text(&GameView::of(&game), true);
//! assert!(text.starts_with("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod render;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Rendering
pub use render::render_text;

// Crate-level exports - Headless replay
pub use replay::{ReplayError, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, TITLE, draw, run_tui};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Board, GameHistory, GameView, HistoryEntry, Mark, MoveRejection, Position, Square, Status,
    attempt_move, check_winner,
};
