//! Linear move history with branch truncation.
//!
//! A [`History`] is the ordered list of board snapshots, one per move,
//! starting from the empty board. Playing from an earlier snapshot drops
//! every later one: there is exactly one timeline.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::{Board, Position, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Ordered board snapshots; snapshot 0 is always the empty board.
///
/// Built only through [`History::new`] and [`History::apply_move`], so every
/// value upholds the history invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (moves played on this timeline + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at move number `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Appends a move made from snapshot `cursor`.
    ///
    /// Returns the new history and its cursor (the new last index). The
    /// receiver is left untouched, so a rejected move is a no-op.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`] precondition failure; the move is not applied.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn apply_move(&self, cursor: usize, pos: Position) -> Result<(History, usize), MoveError> {
        let action = Move::new(cursor, pos);
        MoveContract::pre(self, &action)?;

        let mut snapshots = self.snapshots[..=cursor].to_vec();
        let next = self.snapshots[cursor].with(pos, Square::Occupied(action.player));
        snapshots.push(next);
        let after = History { snapshots };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &action, &after)?;

        let dropped = self.len() - (cursor + 1);
        if dropped > 0 {
            debug!(dropped, "Discarded future snapshots");
        }
        info!(%action, "Move applied");

        let new_cursor = after.len() - 1;
        Ok((after, new_cursor))
    }

    /// Validates a jump target, returning it as the new cursor.
    ///
    /// # Errors
    ///
    /// [`MoveError::CursorOutOfRange`] when `target` is not a recorded move.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn jump_to(&self, target: usize) -> Result<usize, MoveError> {
        if target < self.len() {
            Ok(target)
        } else {
            Err(MoveError::CursorOutOfRange {
                cursor: target,
                len: self.len(),
            })
        }
    }

    /// Recovers the move sequence from consecutive snapshots.
    #[instrument(skip(self))]
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .enumerate()
            .filter_map(|(from, pair)| {
                pair[1]
                    .diff(&pair[0])
                    .first()
                    .map(|pos| Move::new(from, *pos))
            })
            .collect()
    }

    /// Plays `positions` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal move.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<History, MoveError> {
        positions.iter().try_fold(History::new(), |history, pos| {
            history
                .apply_move(history.len() - 1, *pos)
                .map(|(next, _)| next)
        })
    }

    #[cfg(test)]
    pub(crate) fn with_snapshot_unchecked(&self, board: Board) -> History {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(board);
        History { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0), Some(&Board::new()));
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let (history, cursor) = History::new().apply_move(0, Position::Center).expect("legal");
        assert_eq!(cursor, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get(1).map(|b| b.get(Position::Center)),
            Some(Square::Occupied(Player::X))
        );
    }

    #[test]
    fn test_rejected_move_leaves_history_untouched() {
        let history = History::replay(&[Position::Center]).expect("legal");
        let before = history.clone();
        assert!(history.apply_move(1, Position::Center).is_err());
        assert_eq!(history, before);
    }

    #[test]
    fn test_branch_truncates_future() {
        let history = History::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
        ])
        .expect("legal");
        assert_eq!(history.len(), 4);

        let (branched, cursor) = history.apply_move(1, Position::TopRight).expect("legal");
        assert_eq!(branched.len(), 3);
        assert_eq!(cursor, 2);
        assert_eq!(branched.snapshots()[..2], history.snapshots()[..2]);
        assert_eq!(
            branched.get(2).map(|b| b.get(Position::TopRight)),
            Some(Square::Occupied(Player::O))
        );
    }

    #[test]
    fn test_jump_to() {
        let history = History::replay(&[Position::TopLeft, Position::Center]).expect("legal");
        assert_eq!(history.jump_to(0), Ok(0));
        assert_eq!(history.jump_to(2), Ok(2));
        assert_eq!(
            history.jump_to(3),
            Err(MoveError::CursorOutOfRange { cursor: 3, len: 3 })
        );
    }

    #[test]
    fn test_moves_recovered_from_snapshots() {
        let positions = [Position::TopLeft, Position::Center, Position::BottomRight];
        let history = History::replay(&positions).expect("legal");
        let moves = history.moves();
        assert_eq!(
            moves.iter().map(Move::position).collect::<Vec<_>>(),
            positions.to_vec()
        );
        assert_eq!(
            moves.iter().map(Move::player).collect::<Vec<_>>(),
            vec![Player::X, Player::O, Player::X]
        );
    }

    #[test]
    fn test_recovered_moves_use_origin_turn() {
        let history = History::replay(&[Position::Center, Position::TopLeft]).expect("legal");
        for (from, mov) in history.moves().iter().enumerate() {
            assert_eq!(mov.origin(), from);
            assert_eq!(*mov, Move::new(from, mov.position()));
        }
    }

    #[test]
    fn test_serializes_snapshots_from_empty_board() {
        let history = History::replay(&[Position::Center]).expect("legal");
        let json = serde_json::to_value(&history).expect("serialize");
        let snapshots = json["snapshots"].as_array().expect("snapshots");
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0], serde_json::to_value(Board::new()).expect("serialize"));
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        assert_eq!(
            History::replay(&[Position::Center, Position::Center]),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }
}
