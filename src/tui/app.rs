//! Application state and key dispatch.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameHistory, GameView, Position};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the history list.
    History,
}

impl Focus {
    /// Switches between board and history.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the game history; the cursor and list selection are view-only
/// state that never feed back into the game.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// The game history.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// View of the displayed snapshot.
    pub fn view(&self) -> GameView {
        GameView::of(&self.game)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_index();
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.click_cell(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_cell(other) {
                    self.cursor = pos;
                    self.click_cell(pos);
                }
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.game.len() - 1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.game.len() - 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected),
            _ => {}
        }
    }

    /// Cell-click intent. Illegal clicks change nothing and show nothing.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, pos: Position) {
        match self.game.click(pos) {
            Ok(()) => {
                self.selected = self.game.current_index();
                debug!(current = self.game.current_index(), "Move accepted");
            }
            Err(rejection) => debug!(%rejection, "Click ignored"),
        }
    }

    /// History-entry intent.
    ///
    /// `index` must come from the history list, so it is always in range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        self.game.jump_to(index);
        self.selected = index;
        debug!("Jumped");
    }
}
