//! Status line derived from a board.

use crate::rules::check_winner;
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line shows for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The board has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No winner yet; the given mark moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Derives the status for `board`.
    ///
    /// `next` comes from move parity; the board itself is only consulted
    /// for a winner.
    #[instrument(skip(board))]
    pub fn of(board: &Board, next: Mark) -> Self {
        match check_winner(board) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_next_player_text() {
        assert_eq!(Status::of(&Board::new(), Mark::X).to_string(), "Next player: X");
        assert_eq!(Status::of(&Board::new(), Mark::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_winner_overrides_turn() {
        let board = [Position::TopRight, Position::Center, Position::BottomLeft]
            .into_iter()
            .fold(Board::new(), |b, pos| b.with_mark(pos, Mark::X));
        let status = Status::of(&board, Mark::O);
        assert_eq!(status, Status::Winner(Mark::X));
        assert_eq!(status.to_string(), "Winner: X");
    }
}
