//! Move legality for a single board.
//!
//! A move is the intent to put the next mark on a cell. Validation and the
//! resulting board are computed here; committing the board is the job of
//! [`GameHistory`](crate::GameHistory).

use crate::rules::check_winner;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Why a move was not applied.
///
/// Hosts drop these silently; the variants exist so callers and tests can
/// tell the two cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Mark),
}

/// Computes the board after `mark` is placed at `position`.
///
/// Rejected when the board already has a winner (checked first) or when the
/// square is taken. The input board is never modified.
#[instrument(skip(board))]
pub fn attempt_move(board: &Board, position: Position, mark: Mark) -> Result<Board, MoveRejection> {
    if let Some(winner) = check_winner(board) {
        debug!(%winner, "Move on a won board");
        return Err(MoveRejection::GameOver(winner));
    }

    if !board.is_empty(position) {
        debug!("Move on an occupied square");
        return Err(MoveRejection::SquareOccupied(position));
    }

    Ok(board.with_mark(position, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_move_on_empty_square() {
        let board = Board::new();
        let next = attempt_move(&board, Position::Center, Mark::X).expect("legal move");
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_square_rejected_for_both_marks() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        for mark in [Mark::X, Mark::O] {
            assert_eq!(
                attempt_move(&board, Position::Center, mark),
                Err(MoveRejection::SquareOccupied(Position::Center))
            );
        }
    }

    #[test]
    fn test_won_board_rejects_every_square() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::O)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomRight, Mark::O);
        for pos in Position::ALL {
            assert_eq!(
                attempt_move(&board, pos, Mark::X),
                Err(MoveRejection::GameOver(Mark::O))
            );
        }
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            MoveRejection::SquareOccupied(Position::TopLeft).to_string(),
            "Square Top-left is already occupied"
        );
        assert_eq!(MoveRejection::GameOver(Mark::X).to_string(), "Game is already won by X");
    }
}
