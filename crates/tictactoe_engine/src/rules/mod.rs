//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or turns; the outcome of a board is recomputed whenever it is
//! needed and never stored.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, check_winner};

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Outcome {
    /// No line completed and at least one empty square.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates a board: first completed line wins, else full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Won { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// A move is legal when the game is still in progress and the square is empty.
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, pos: Position) -> bool {
    !evaluate(board).is_terminal() && board.is_empty(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(cells: &[(Position, Player)]) -> Board {
        cells
            .iter()
            .fold(Board::new(), |b, (pos, player)| b.with(*pos, Square::Occupied(*player)))
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
        assert!(is_legal_move(&Board::new(), Position::Center));
    }

    #[test]
    fn test_occupied_square_is_illegal() {
        let board = play(&[(Position::Center, Player::X)]);
        assert!(!is_legal_move(&board, Position::Center));
        assert!(is_legal_move(&board, Position::TopLeft));
    }

    #[test]
    fn test_no_moves_after_win() {
        let board = play(&[
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
        ]);
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 3, 6]));
        assert!(!is_legal_move(&board, Position::BottomRight));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let board = play(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert!(evaluate(&board).is_terminal());
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        // X X X / O O X / X O O
        let board = play(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(evaluate(&board).winner(), Some(Player::X));
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let json = serde_json::to_value(evaluate(&Board::new())).expect("serialize");
        assert_eq!(json["state"], "in_progress");
    }
}
