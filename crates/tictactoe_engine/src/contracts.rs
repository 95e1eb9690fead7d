//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(history, move)} apply {Q(before, move, after)}.

use super::action::{Move, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::evaluate;
use super::{History, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The move starts from a recorded snapshot.
pub struct FromRecordedSnapshot;

impl FromRecordedSnapshot {
    /// Fails with [`MoveError::CursorOutOfRange`] past the end of history.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        if mov.from < history.len() {
            Ok(())
        } else {
            Err(MoveError::CursorOutOfRange {
                cursor: mov.from,
                len: history.len(),
            })
        }
    }
}

/// Precondition: The snapshot being played from is still in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a won or drawn snapshot.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        match history.get(mov.from) {
            Some(board) if evaluate(board).is_terminal() => Err(MoveError::GameOver),
            _ => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`].
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        match history.get(mov.from) {
            Some(board) if !board.is_empty(mov.position) => {
                Err(MoveError::SquareOccupied(mov.position))
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        FromRecordedSnapshot::check(mov, history)?;
        GameNotOver::check(mov, history)?;
        SquareIsEmpty::check(mov, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for appending a move to a history.
///
/// Preconditions:
/// - Move starts from a recorded snapshot
/// - That snapshot is still in progress
/// - Square is empty
///
/// Postconditions:
/// - History is truncated after `from` and grows by exactly one
/// - Snapshots `0..=from` are unchanged
/// - The new snapshot holds the player's mark at the position
/// - All history invariants hold
pub struct MoveContract;

impl Contract<History, Move> for MoveContract {
    fn pre(history: &History, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, history)
    }

    fn post(before: &History, action: &Move, after: &History) -> Result<(), MoveError> {
        if after.len() != action.from + 2 {
            warn!(from = action.from, len = after.len(), "Truncation law violated");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} snapshots, found {}",
                action.from + 2,
                after.len()
            )));
        }

        if after.snapshots()[..=action.from] != before.snapshots()[..=action.from] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier snapshots changed".to_string(),
            ));
        }

        let placed = after
            .get(action.number())
            .map(|board| board.get(action.position));
        if placed != Some(crate::Square::Occupied(action.player)) {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {} missing from new snapshot",
                action
            )));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Validates a raw board index and returns its position.
#[instrument]
pub fn position_for_index(index: usize) -> Result<Position, MoveError> {
    Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
}
