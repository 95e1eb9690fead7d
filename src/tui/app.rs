//! Application state and logic.

use crossterm::event::KeyEvent;
use tictactoe_engine::{Position, Session};
use tracing::{debug, info, instrument};

use super::input::{Action, Focus, Step, action_for, move_cursor};
use crate::config::DisplayConfig;

/// Main application state.
///
/// Owns the game [`Session`]; everything else here is UI selection state.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    board_cursor: Position,
    focus: Focus,
    /// Move number highlighted in the move list.
    selected_move: usize,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            session: Session::with_order(*config.move_order()),
            board_cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Selected board cell.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move number highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Row of the highlighted move in presentation order.
    pub fn selected_row(&self) -> usize {
        self.session
            .move_entries()
            .iter()
            .position(|e| e.number == self.selected_move)
            .unwrap_or(0)
    }

    /// Whether empty cells show their key number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(key) {
            self.apply(action);
        }
    }

    /// Applies an action.
    #[instrument(skip(self), fields(cursor = self.session.cursor(), focus = ?self.focus))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::ToggleFocus => self.focus = self.focus.toggle(),
            Action::ToggleOrder => {
                let order = self.session.toggle_order();
                debug!(%order, "Move order toggled");
            }
            Action::Step(step) => match self.focus {
                Focus::Board => self.board_cursor = move_cursor(self.board_cursor, step),
                Focus::MoveList => self.step_move_list(step),
            },
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.board_cursor),
                Focus::MoveList => self.jump(self.selected_move),
            },
            Action::PlayAt(pos) => {
                self.board_cursor = pos;
                self.play(pos);
            }
        }
    }

    fn play(&mut self, pos: Position) {
        // Illegal moves are ignored; the session logs why.
        if self.session.play_at(pos).is_ok() {
            self.selected_move = self.session.cursor();
        }
    }

    fn jump(&mut self, target: usize) {
        let actionable = self
            .session
            .move_entries()
            .iter()
            .any(|e| e.number == target && e.is_actionable());
        if !actionable {
            return;
        }
        if let Ok(cursor) = self.session.jump_to(target) {
            info!(cursor, "Jumped to move");
        }
    }

    fn step_move_list(&mut self, step: Step) {
        let entries = self.session.move_entries();
        let row = self.selected_row();
        let row = match step {
            Step::Up | Step::Left => row.saturating_sub(1),
            Step::Down | Step::Right => (row + 1).min(entries.len() - 1),
        };
        self.selected_move = entries[row].number;
    }
}
