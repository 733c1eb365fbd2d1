//! Plain-text rendering of a [`GameView`].

use rewind_tictactoe::{GameView, Position};

/// Renders the status line, the board and the history list.
///
/// Empty cells are numbered 1-9 when `numbered` is set. The displayed
/// history entry is marked with `>`.
pub fn render_text(view: &GameView, numbered: bool) -> String {
    let mut out = String::new();
    out.push_str(view.status());
    out.push_str("\n\n");

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| match view.cell(pos) {
                Some(mark) => mark.to_string(),
                None if numbered => (pos.to_index() + 1).to_string(),
                None => " ".to_string(),
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("-+-+-\n");
        }
    }

    out.push_str("\nHistory:\n");
    for entry in view.history() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}
