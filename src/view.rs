//! Front-end independent projection of a session.
//!
//! A [`SessionView`] is everything a renderer needs, computed from the
//! session in one go. The headless `replay` command prints it as text or
//! JSON; the terminal UI reads the session directly.

use serde::Serialize;
use tictactoe_engine::{MoveOrder, Outcome, Player, Position, Session};

/// One move-list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    /// History index the row jumps to.
    pub number: usize,
    /// Row text.
    pub label: String,
    /// Whether the row is a jump control.
    pub actionable: bool,
}

/// Derived, serialisable view of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Cells in row-major order; `None` is empty.
    pub cells: Vec<Option<Player>>,
    /// Displayed move number.
    pub cursor: usize,
    /// Outcome of the displayed board.
    pub outcome: Outcome,
    /// Status line text.
    pub status: String,
    /// Indices to highlight (the winning line, if any).
    pub highlight: Vec<usize>,
    /// Move-list order.
    pub move_order: MoveOrder,
    /// Move list in presentation order.
    pub moves: Vec<MoveRow>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let board = session.current_board();
        Self {
            cells: Position::ALL.iter().map(|p| board.get(*p).player()).collect(),
            cursor: session.cursor(),
            outcome: session.outcome(),
            status: session.status().to_string(),
            highlight: session
                .winning_line()
                .map(|line| line.indices().to_vec())
                .unwrap_or_default(),
            move_order: session.move_order(),
            moves: session
                .move_entries()
                .into_iter()
                .map(|entry| MoveRow {
                    number: entry.number,
                    actionable: entry.is_actionable(),
                    label: entry.label.to_string(),
                })
                .collect(),
        }
    }
}

impl SessionView {
    /// Plain-text rendering: status, board, move list.
    ///
    /// Winning cells are wrapped in `*`, jump controls in brackets.
    pub fn render_text(&self, numbered: bool) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push_str("\n\n");

        for (row, cells) in self.cells.chunks(3).enumerate() {
            let line = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let index = row * 3 + col;
                    let symbol = match cell {
                        Some(player) => player.to_string(),
                        None if numbered => (index + 1).to_string(),
                        None => ".".to_string(),
                    };
                    if self.highlight.contains(&index) {
                        format!("*{}*", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|");
            out.push_str(&line);
            out.push('\n');
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }

        out.push_str(&format!("\nMoves ({}):\n", self.move_order));
        for row in &self.moves {
            if row.actionable {
                out.push_str(&format!("  [{}]\n", row.label));
            } else {
                out.push_str(&format!("   {}\n", row.label));
            }
        }
        out
    }
}
