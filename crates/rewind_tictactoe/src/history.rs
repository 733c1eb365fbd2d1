//! Game history: board snapshots plus a cursor into them.
//!
//! `GameHistory` is the single owner of game state. Index 0 is the empty
//! board and index `i` is the board after move `i`. Whose turn it is comes
//! from the cursor's parity and is never stored.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::moves::{MoveRejection, attempt_move};
use crate::rules::check_winner;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Label for the history entry at `index`.
fn entry_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

/// Board snapshots and the currently displayed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Commits `next` as the board after the current one.
    ///
    /// Snapshots after the cursor are discarded first, so playing from a
    /// rewound position replaces the old future. No legality check happens
    /// here; use [`GameHistory::click`] to go through the move rules.
    #[instrument(skip(self, next), fields(current = self.current, len = self.snapshots.len()))]
    pub fn play(&mut self, next: Board) {
        let discarded = self.snapshots.len() - (self.current + 1);
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        debug!(discarded, current = self.current, filled = next.filled(), "Snapshot committed");
    }

    /// Moves the cursor to `index` without touching the snapshots.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Hosts only offer indices taken from
    /// the history itself.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.snapshots.len(),
            "jump to move {} outside history of {} entries",
            index,
            self.snapshots.len()
        );
        self.current = index;
    }

    /// Handles a click on `position` for the current board.
    ///
    /// Places the next mark if the move is legal and commits the result.
    /// On rejection nothing changes.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn click(&mut self, position: Position) -> Result<(), MoveRejection> {
        let next = attempt_move(self.current_board(), position, self.next_mark())?;
        self.play(next);

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after click: {:?}",
            HistoryInvariants::check_all(self)
        );
        Ok(())
    }

    /// True when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.current % 2 == 0
    }

    /// The mark placed by the next accepted move.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    /// Index of the displayed snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Winner on the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Labels for every snapshot, in order.
    pub fn labels(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(entry_label).collect()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current: usize) -> Self {
        Self { snapshots, current }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(cells: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &i in cells {
            history.click(Position::ALL[i]).expect("legal move");
        }
        history
    }

    #[test]
    fn test_new_history_is_seeded() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(*history.current_board(), Board::new());
        assert!(history.x_is_next());
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut history = GameHistory::new();
        let next = Board::new().with_mark(Position::Center, Mark::X);
        history.play(next);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), 1);
        assert_eq!(*history.current_board(), next);
        assert_eq!(history.next_mark(), Mark::O);
    }

    #[test]
    fn test_click_rejection_leaves_state() {
        let mut history = played(&[4]);
        let before = history.clone();
        assert_eq!(
            history.click(Position::Center),
            Err(MoveRejection::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut history = played(&[4, 0, 8]);
        history.jump_to(1);
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_index(), 1);
        assert!(!history.x_is_next());
        history.jump_to(3);
        assert_eq!(history.current_index(), 3);
    }

    #[test]
    fn test_click_after_rewind_discards_future() {
        let mut history = played(&[4, 0, 8]);
        let old_future = history.snapshots()[2];
        history.jump_to(1);
        history.click(Position::TopRight).expect("legal move");

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_ne!(history.snapshots()[2], old_future);
        assert!(history.current_board().is_empty(Position::BottomRight));
    }

    #[test]
    #[should_panic(expected = "outside history")]
    fn test_jump_out_of_range_panics() {
        let mut history = played(&[4]);
        history.jump_to(2);
    }

    #[test]
    fn test_labels() {
        let history = played(&[4, 0]);
        assert_eq!(
            history.labels(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_won_history_stays_navigable() {
        // X: 0, 4, 8  O: 1, 2
        let mut history = played(&[0, 1, 4, 2, 8]);
        assert_eq!(history.winner(), Some(Mark::X));
        assert_eq!(
            history.click(Position::MiddleLeft),
            Err(MoveRejection::GameOver(Mark::X))
        );
        history.jump_to(4);
        assert_eq!(history.winner(), None);
        history.click(Position::MiddleLeft).expect("legal after rewind");
        assert_eq!(history.len(), 6);
    }
}
