//! Tests for board positions against board state.

use tictactoe_engine::{Board, Player, Position, Session, Square, is_legal_move};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_every_cell_legal_on_empty_board() {
    let board = Board::new();
    assert!(Position::ALL.iter().all(|pos| is_legal_move(&board, *pos)));
}

#[test]
fn test_occupied_cells_not_legal() {
    let board = Board::new()
        .with(Position::TopLeft, Square::Occupied(Player::X))
        .with(Position::Center, Square::Occupied(Player::O));

    let legal: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| is_legal_move(&board, *pos))
        .collect();
    assert_eq!(legal.len(), 7);
    assert!(!legal.contains(&Position::TopLeft));
    assert!(!legal.contains(&Position::Center));
    assert!(legal.contains(&Position::BottomRight));
}

#[test]
fn test_session_legality_tracks_empty_cells_until_game_ends() {
    let mut session = Session::new();
    for index in [0, 1, 3, 4] {
        session.play(index).expect("legal");
        let board = *session.current_board();
        for pos in Position::ALL {
            assert_eq!(session.is_legal(pos), board.is_empty(pos));
        }
    }

    session.play(6).expect("winning move");
    assert!(Position::ALL.iter().all(|pos| !session.is_legal(*pos)));
}
