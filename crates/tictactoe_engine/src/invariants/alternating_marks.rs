//! Alternating marks invariant: X, O, X, O, ...

use super::super::{History, Player, Square};
use super::Invariant;

/// Invariant: Every square filled between snapshot i-1 and i carries the
/// mark of the player to move at i-1 (X on even, O on odd).
pub struct AlternatingMarksInvariant;

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(from, pair)| {
                let expected = Square::Occupied(Player::for_move(from));
                pair[1]
                    .diff(&pair[0])
                    .into_iter()
                    .all(|pos| pair[1].get(pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
