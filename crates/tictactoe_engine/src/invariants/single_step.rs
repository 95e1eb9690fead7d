//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::{History, Square};
use super::Invariant;

/// Invariant: For i > 0, snapshot i differs from snapshot i-1 in exactly
/// one square, and that square was empty in snapshot i-1.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let changed = pair[1].diff(&pair[0]);
            changed.len() == 1 && pair[0].get(changed[0]) == Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one previously empty square"
    }
}
