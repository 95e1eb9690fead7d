//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent a player's
//! intent to branch the timeline from a given move number and can be
//! validated independently of execution.

use super::{Player, Position};
use serde::Serialize;
use tracing::instrument;

/// A move: a player placing their mark at a position, starting from the
/// snapshot at move number `from`.
///
/// The player is always derived from `from`, so a move can never carry the
/// wrong mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub(crate) from: usize,
    pub(crate) player: Player,
    pub(crate) position: Position,
}

impl Move {
    /// Creates the move whoever is to play at `from` would make at `position`.
    #[instrument]
    pub fn new(from: usize, position: Position) -> Self {
        Self {
            from,
            player: Player::for_move(from),
            position,
        }
    }

    /// Move number (history index) the move is made from.
    pub fn origin(&self) -> usize {
        self.from
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move number of the snapshot this move produces.
    pub fn number(&self) -> usize {
        self.from + 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.number(), self.player, self.position.label())
    }
}

/// Reason a move or jump was rejected.
///
/// Rejections never change state; the error only says why nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The snapshot being played from is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A raw board index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// A move number outside the recorded history.
    #[display("Move #{} out of range (history has {} entries)", cursor, len)]
    CursorOutOfRange {
        /// Requested move number.
        cursor: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
