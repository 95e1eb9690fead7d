//! Initial snapshot invariant: every timeline starts from an empty board.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: Snapshot 0 exists and is the empty board.
pub struct InitialEmptyInvariant;

impl Invariant<History> for InitialEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_history_holds() {
        assert!(InitialEmptyInvariant::holds(&History::new()));
    }

    #[test]
    fn test_holds_after_branching() {
        let history = History::replay(&[Position::Center, Position::TopLeft]).expect("legal");
        let (history, _) = history.apply_move(0, Position::BottomRight).expect("legal");
        assert!(InitialEmptyInvariant::holds(&history));
    }
}
