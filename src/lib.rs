//! Tic-tac-toe with a time-travel move history.
//!
//! The game rules and session live in [`tictactoe_engine`]; this crate is the
//! front end around them.
//!
//! # Architecture
//!
//! - **TUI**: interactive terminal game (ratatui + crossterm)
//! - **View**: serialisable projection of a session for headless output
//! - **Config**: TOML display and logging preferences
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Session, SessionView};
//!
//! let mut session = Session::new();
//! session.play(4).unwrap();
//! let view = SessionView::from(&session);
//! assert_eq!(view.status, "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, DisplayConfig, LoggingConfig};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Focus, Step, draw, run_tui};

// Crate-level exports - Headless view
pub use view::{MoveRow, SessionView};

// Crate-level exports - Game types
pub use tictactoe_engine::{
    Board, Move, MoveEntry, MoveError, MoveLabel, MoveOrder, Outcome, Player, Position, Session,
    Square, Status, WinningLine,
};
