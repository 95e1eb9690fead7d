//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_timeline::Position;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with a jump-to-any-move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// List moves latest-first
        #[arg(long)]
        descending: bool,
    },

    /// Apply moves headlessly and print the resulting view
    Replay {
        /// Cells to play in order: index 0-8 or a label such as "center"
        #[arg(value_parser = parse_position)]
        moves: Vec<Position>,

        /// Move number to display after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// List moves latest-first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like top-left)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["tictactoe_timeline"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "tictactoe_timeline",
            "replay",
            "0",
            "center",
            "8",
            "--jump",
            "1",
            "--json",
            "--config",
            "x.toml",
        ])
        .expect("parse");

        match cli.command {
            Some(Command::Replay {
                moves,
                jump,
                descending,
                json,
            }) => {
                assert_eq!(
                    moves,
                    vec![Position::TopLeft, Position::Center, Position::BottomRight]
                );
                assert_eq!(jump, Some(1));
                assert!(!descending);
                assert!(json);
            }
            other => panic!("Expected replay, got {:?}", other),
        }
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_bad_cell_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay", "9"]).is_err());
    }
}
