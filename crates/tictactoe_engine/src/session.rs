//! The mutable game session a front end owns.
//!
//! A [`Session`] is `{history, cursor, move_order}`. Everything a view shows
//! (board, turn, outcome, status line, move list) is derived from it on
//! demand. `play` and `jump_to` are the only ways to change history or
//! cursor; a rejected call leaves the session exactly as it was.

use super::action::{Move, MoveError};
use super::contracts::position_for_index;
use super::history::History;
use super::moves::{MoveEntry, MoveOrder, move_entries};
use super::rules::{Outcome, WinningLine, evaluate, is_legal_move};
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game in progress.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
    /// Game won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board full, no winner.
    #[display("Draw!!")]
    Draw,
}

impl Status {
    /// Status for an outcome with `to_move` as the player on turn.
    pub fn new(outcome: Outcome, to_move: Player) -> Self {
        match outcome {
            Outcome::InProgress => Status::NextPlayer(to_move),
            Outcome::Won { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
        }
    }
}

/// One tic-tac-toe session with time-travel history.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    /// Every snapshot on the current timeline.
    history: History,
    /// Index of the displayed, playable snapshot.
    #[getter(skip)]
    cursor: usize,
    /// Presentation order of the move list.
    #[getter(skip)]
    move_order: MoveOrder,
}

impl Session {
    /// Creates a session at the empty board with the default move order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a session at the empty board listing moves in `move_order`.
    #[instrument]
    pub fn with_order(move_order: MoveOrder) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            move_order,
        }
    }

    /// Plays board index `index` (0-8) for the player on turn.
    ///
    /// Any snapshots after the cursor are discarded first.
    ///
    /// # Errors
    ///
    /// Reports why the move was ignored; the session is unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = position_for_index(index)?;
        self.play_at(pos)
    }

    /// Plays `pos` for the player on turn. See [`Session::play`].
    ///
    /// # Errors
    ///
    /// Reports why the move was ignored; the session is unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play_at(&mut self, pos: Position) -> Result<Move, MoveError> {
        let (history, cursor) = self.history.apply_move(self.cursor, pos).inspect_err(|e| {
            debug!(error = %e, "Move ignored");
        })?;
        let played = Move::new(self.cursor, pos);
        self.history = history;
        self.cursor = cursor;

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(played)
    }

    /// Moves the cursor to `target` without touching the history.
    ///
    /// # Errors
    ///
    /// [`MoveError::CursorOutOfRange`]; the cursor is unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, target: usize) -> Result<usize, MoveError> {
        self.cursor = self.history.jump_to(target).inspect_err(|e| {
            debug!(error = %e, "Jump ignored");
        })?;
        Ok(self.cursor)
    }

    /// Flips the move-list order. History and cursor are untouched.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> MoveOrder {
        self.move_order = self.move_order.toggle();
        self.move_order
    }

    /// Index of the displayed, playable snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Presentation order of the move list.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        // Cursor is only ever set from a validated index.
        &self.history.snapshots()[self.cursor]
    }

    /// Player to move at the cursor (X on even, O on odd).
    pub fn next_player(&self) -> Player {
        Player::for_move(self.cursor)
    }

    /// Outcome of the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Winning line to highlight, if the board at the cursor is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome().winning_line()
    }

    /// Status line text source.
    pub fn status(&self) -> Status {
        Status::new(self.outcome(), self.next_player())
    }

    /// Whether `pos` may be played right now.
    pub fn is_legal(&self, pos: Position) -> bool {
        is_legal_move(self.current_board(), pos)
    }

    /// Move list in presentation order.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        move_entries(self.history.len(), self.cursor, self.move_order)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{InvariantSet, SessionInvariants};
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated"
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
