//! Pure tic-tac-toe logic with a time-travel move history.
//!
//! - [`rules`]: win detection over the 8 fixed lines
//! - [`attempt_move`]: click legality and the next board
//! - [`GameHistory`]: snapshots, cursor, `play` / `jump_to` / `click`
//! - [`GameView`]: what a renderer needs for one frame
//!
//! ```
//! use rewind_tictactoe::{GameHistory, GameView, Position};
//!
//! let mut game = GameHistory::new();
//! game.click(Position::Center).unwrap();
//! game.jump_to(0);
//! assert_eq!(GameView::of(&game).status(), "Next player: X");
//! assert_eq!(game.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use history::GameHistory;
pub use moves::{MoveRejection, attempt_move};
pub use position::Position;
pub use rules::check_winner;
pub use status::Status;
pub use types::{Board, Mark, Square};
pub use view::{GameView, HistoryEntry};
