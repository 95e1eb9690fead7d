//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies a board snapshot as in progress,
//!   won (with the winning line) or drawn; [`is_legal_move`] gates moves.
//! - **History**: [`History`] keeps one snapshot per move on a single
//!   timeline. Playing from an earlier snapshot discards the later ones.
//! - **Session**: [`Session`] is the `{history, cursor, move_order}` object
//!   a front end owns. Turn, outcome, status and move list are derived.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Session, Status, Player};
//!
//! let mut session = Session::new();
//! for index in [0, 1, 3, 4, 6] {
//!     session.play(index).unwrap();
//! }
//! assert_eq!(session.status(), Status::Winner(Player::X));
//! assert_eq!(session.status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod moves;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract, position_for_index};
pub use history::History;
pub use moves::{MoveEntry, MoveLabel, MoveOrder, describe_move, move_entries};
pub use position::Position;
pub use rules::{Outcome, WinningLine, evaluate, is_legal_move};
pub use session::{Session, Status};
pub use types::{Board, Player, Square};
