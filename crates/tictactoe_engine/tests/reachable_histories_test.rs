//! Properties checked over every history reachable by legal play.

use tictactoe_engine::invariants::{HistoryInvariants, InvariantSet};
use tictactoe_engine::{History, Outcome, Player, Position, evaluate};

/// Visits every history reachable from `history` by appending legal moves.
fn walk(history: &History, visit: &mut impl FnMut(&History)) {
    visit(history);
    let cursor = history.len() - 1;
    for pos in Position::ALL {
        if let Ok((next, _)) = history.apply_move(cursor, pos) {
            walk(&next, visit);
        }
    }
}

#[test]
fn test_every_reachable_history_is_a_valid_timeline() {
    let mut games_finished = 0usize;
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    walk(&History::new(), &mut |history| {
        assert!(HistoryInvariants::check_all(history).is_ok());

        let last = history.snapshots()[history.len() - 1];
        for pair in history.snapshots().windows(2) {
            assert_eq!(pair[1].diff(&pair[0]).len(), 1);
        }
        // Every earlier snapshot was still in progress.
        for board in &history.snapshots()[..history.len() - 1] {
            assert_eq!(evaluate(board), Outcome::InProgress);
        }

        match evaluate(&last) {
            Outcome::InProgress => {}
            Outcome::Won { player, .. } => {
                games_finished += 1;
                match player {
                    Player::X => x_wins += 1,
                    Player::O => o_wins += 1,
                }
            }
            Outcome::Draw => {
                games_finished += 1;
                draws += 1;
            }
        }
    });

    // Known totals for tic-tac-toe played to completion.
    assert_eq!(games_finished, 255_168);
    assert_eq!(x_wins, 131_184);
    assert_eq!(o_wins, 77_904);
    assert_eq!(draws, 46_080);
}
