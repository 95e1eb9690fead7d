//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Arrow keys move over the move list.
    MoveList,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::MoveList,
            Focus::MoveList => Focus::Board,
        }
    }
}

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Switch between board and move list.
    ToggleFocus,
    /// Reverse the move list.
    ToggleOrder,
    /// Move the focused cursor.
    Step(Step),
    /// Play the selected cell or jump to the selected move.
    Activate,
    /// Play a cell directly by key number.
    PlayAt(Position),
}

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char('o') => Some(Action::ToggleOrder),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Step(Step::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Step(Step::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Step(Step::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Step(Step::Right)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlayAt),
        _ => None,
    }
}

/// Moves the board cursor one step, stopping at the edges.
pub fn move_cursor(cursor: Position, step: Step) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match step {
        Step::Up => row.checked_sub(1).map(|r| (r, col)),
        Step::Down => Some((row + 1, col)),
        Step::Left => col.checked_sub(1).map(|c| (row, c)),
        Step::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
