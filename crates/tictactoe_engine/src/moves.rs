//! Move-list presentation: entry labels and ordering.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Presentation order of the move list.
///
/// Defaults to [`MoveOrder::Ascending`] (oldest move first).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Move numbers `0..len` in this order.
    pub fn arrange(self, len: usize) -> Vec<usize> {
        match self {
            Self::Ascending => (0..len).collect(),
            Self::Descending => (0..len).rev().collect(),
        }
    }
}

/// What a move-list entry says and whether it can be activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveLabel {
    /// "Go to game start" (move 0, always a jump control).
    GameStart,
    /// "You are at move #N" (static text for the current move).
    Current(usize),
    /// "Go to move #N" (jump control).
    GoTo(usize),
}

impl MoveLabel {
    /// True when the entry is a jump control rather than static text.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, MoveLabel::Current(_))
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::GameStart => write!(f, "Go to game start"),
            MoveLabel::Current(n) => write!(f, "You are at move #{}", n),
            MoveLabel::GoTo(n) => write!(f, "Go to move #{}", n),
        }
    }
}

/// Labels move `number` relative to the current cursor.
pub fn describe_move(number: usize, cursor: usize) -> MoveLabel {
    if number == 0 {
        MoveLabel::GameStart
    } else if number == cursor {
        MoveLabel::Current(number)
    } else {
        MoveLabel::GoTo(number)
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub number: usize,
    /// What the entry shows.
    pub label: MoveLabel,
}

impl MoveEntry {
    /// True when activating the entry should jump.
    pub fn is_actionable(&self) -> bool {
        self.label.is_actionable()
    }
}

/// Builds the move list for a history of `len` snapshots.
#[instrument]
pub fn move_entries(len: usize, cursor: usize, order: MoveOrder) -> Vec<MoveEntry> {
    order
        .arrange(len)
        .into_iter()
        .map(|number| MoveEntry {
            number,
            label: describe_move(number, cursor),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_describe_move() {
        assert_eq!(describe_move(0, 0).to_string(), "Go to game start");
        assert_eq!(describe_move(0, 3).to_string(), "Go to game start");
        assert_eq!(describe_move(3, 3).to_string(), "You are at move #3");
        assert_eq!(describe_move(2, 3).to_string(), "Go to move #2");
        assert_eq!(describe_move(4, 3).to_string(), "Go to move #4");
    }

    #[test]
    fn test_only_current_move_is_static() {
        assert!(describe_move(0, 0).is_actionable());
        assert!(!describe_move(2, 2).is_actionable());
        assert!(describe_move(1, 2).is_actionable());
    }

    #[test]
    fn test_move_entries_order() {
        let ascending = move_entries(3, 1, MoveOrder::Ascending);
        assert_eq!(
            ascending.iter().map(|e| e.number).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        let descending = move_entries(3, 1, MoveOrder::Descending);
        assert_eq!(
            descending.iter().map(|e| e.number).collect::<Vec<_>>(),
            vec![2, 1, 0]
        );
        assert_eq!(descending[1].label, MoveLabel::Current(1));
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Ascending.toggle().toggle(), MoveOrder::Ascending);
    }

    #[test]
    fn test_order_parses_from_config_text() {
        assert_eq!(MoveOrder::from_str("descending"), Ok(MoveOrder::Descending));
        assert_eq!(MoveOrder::Ascending.to_string(), "ascending");
        assert!(MoveOrder::from_str("sideways").is_err());
    }
}
