//! Headless replay of a click sequence.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameHistory, Position};
use tracing::{debug, instrument, warn};

/// Replay input that cannot be turned into intents.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A move names no cell.
    #[display("Unknown cell {:?}: use 0-8 or a label such as \"center\"", _0)]
    UnknownCell(#[error(not(source))] String),

    /// The jump target is not in the history.
    #[display("Cannot jump to move {}: history has {} entries", index, len)]
    JumpOutOfRange {
        /// Requested entry.
        index: usize,
        /// History length.
        len: usize,
    },
}

/// Clicks each cell in order, then optionally jumps.
///
/// Illegal clicks are skipped exactly as the interactive UI skips them.
/// Every move is parsed before any is played.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[String], jump: Option<usize>) -> Result<GameHistory, ReplayError> {
    let positions = moves
        .iter()
        .map(|m| Position::from_label_or_number(m).ok_or_else(|| ReplayError::UnknownCell(m.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = GameHistory::new();
    for pos in positions {
        match game.click(pos) {
            Ok(()) => debug!(%pos, "Replayed move"),
            Err(rejection) => warn!(%pos, %rejection, "Skipping illegal move"),
        }
    }

    if let Some(index) = jump {
        if index >= game.len() {
            return Err(ReplayError::JumpOutOfRange {
                index,
                len: game.len(),
            });
        }
        game.jump_to(index);
    }

    Ok(game)
}
