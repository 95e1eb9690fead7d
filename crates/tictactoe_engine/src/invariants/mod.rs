//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every reachable
//! history and session. They are checked after each move in debug builds
//! and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        collect(violations)
    }
}

pub mod alternating_marks;
pub mod cursor_in_range;
pub mod initial_empty;
pub mod single_step;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_range::{CursorInRangeInvariant, ValidHistoryInvariant};
pub use initial_empty::InitialEmptyInvariant;
pub use single_step::SingleStepInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    InitialEmptyInvariant,
    SingleStepInvariant,
    AlternatingMarksInvariant,
);

/// All session invariants as a composable set.
pub type SessionInvariants = (CursorInRangeInvariant, ValidHistoryInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, History, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let history = History::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
            .expect("legal moves");
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two marks at once, both O, on the first step.
        let corrupt = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::O))
            .with(Position::Center, Square::Occupied(Player::O));
        let history = History::new().with_snapshot_unchecked(corrupt);

        let violations = HistoryInvariants::check_all(&history).expect_err("corrupt history");
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(SingleStepInvariant::description())));
        assert!(
            violations.contains(&InvariantViolation::new(AlternatingMarksInvariant::description()))
        );
    }
}
