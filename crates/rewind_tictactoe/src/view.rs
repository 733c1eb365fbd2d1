//! Render-ready views derived from a [`GameHistory`].
//!
//! A renderer needs the status line, the cells, which cells accept a click
//! and the history list. All of it is recomputed from the history on every
//! frame; nothing here is stored between renders.

use crate::rules::winning_line;
use crate::{GameHistory, Mark, Position, Status};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One row of the move-history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    /// Snapshot index this entry jumps to.
    index: usize,
    /// Button label.
    label: String,
    /// Whether this is the displayed snapshot.
    is_current: bool,
}

/// Everything a renderer shows for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Status line text.
    status: String,
    /// Winner on the displayed board.
    winner: Option<Mark>,
    /// Mark in each cell, row-major.
    cells: [Option<Mark>; 9],
    /// Cells that would accept a click.
    legal_moves: [bool; 9],
    /// Line to highlight when the board is won.
    winning_line: Option<[Position; 3]>,
    /// Index of the displayed snapshot.
    current_index: usize,
    /// Move-history list.
    history: Vec<HistoryEntry>,
}

impl GameView {
    /// Derives the view for the history's displayed snapshot.
    #[instrument(skip(game), fields(current = game.current_index(), len = game.len()))]
    pub fn of(game: &GameHistory) -> Self {
        let board = game.current_board();
        let status = Status::of(board, game.next_mark());
        let winner = match status {
            Status::Winner(mark) => Some(mark),
            Status::NextPlayer(_) => None,
        };

        let cells = board.squares().map(|square| square.mark());
        let mut legal_moves = [false; 9];
        if winner.is_none() {
            for pos in Position::valid_moves(board) {
                legal_moves[pos.to_index()] = true;
            }
        }

        let history = game
            .labels()
            .into_iter()
            .enumerate()
            .map(|(index, label)| HistoryEntry::new(index, label, index == game.current_index()))
            .collect();

        Self {
            status: status.to_string(),
            winner,
            cells,
            legal_moves,
            winning_line: winning_line(board),
            current_index: game.current_index(),
            history,
        }
    }

    /// Mark shown at `pos`.
    pub fn cell(&self, pos: Position) -> Option<Mark> {
        self.cells[pos.to_index()]
    }

    /// Whether a click at `pos` would be accepted.
    pub fn is_legal(&self, pos: Position) -> bool {
        self.legal_moves[pos.to_index()]
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}
