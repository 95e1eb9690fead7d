//! Tic-tac-toe with a time-travel move history - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_timeline::{AppConfig, MoveOrder, Position, Session, SessionView, run_tui};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        None => run_tui(&config),
        Some(Command::Play { descending }) => run_tui(&apply_order(config, descending)),
        Some(Command::Replay {
            moves,
            jump,
            descending,
            json,
        }) => run_replay(apply_order(config, descending), &moves, jump, json),
    }
}

fn apply_order(config: AppConfig, descending: bool) -> AppConfig {
    if descending {
        config.with_move_order(MoveOrder::Descending)
    } else {
        config
    }
}

/// Applies `moves` to a fresh session and prints the resulting view.
#[instrument(skip(config))]
fn run_replay(config: AppConfig, moves: &[Position], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::with_order(*config.display().move_order());
    for pos in moves {
        // Illegal moves are no-ops, same as clicking an unplayable cell.
        if let Err(e) = session.play_at(*pos) {
            warn!(position = %pos, error = %e, "Skipping move");
        }
    }
    if let Some(target) = jump
        && let Err(e) = session.jump_to(target)
    {
        warn!(target, error = %e, "Ignoring jump");
    }

    info!(cursor = session.cursor(), status = %session.status(), "Replay finished");
    let view = SessionView::from(&session);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render_text(*config.display().show_cell_numbers()));
    }
    Ok(())
}
