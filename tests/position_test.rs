//! Tests for the position enum.

use tictactoe_engine::{Board, Player, Position, Square};

#[test]
fn test_position_index() {
    assert_eq!(Position::TopLeft.index(), 0);
    assert_eq!(Position::Center.index(), 4);
    assert_eq!(Position::BottomRight.index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
    assert_eq!(Position::from_index(usize::MAX), None);
}

#[test]
fn test_index_round_trip() {
    for index in 0..9 {
        let pos = Position::from_index(index).expect("in-bounds index");
        assert_eq!(pos.index(), index);
    }
}

#[test]
fn test_position_display_uses_label() {
    assert_eq!(Position::TopLeft.to_string(), "Top-left");
    assert_eq!(Position::Center.label(), "Center");
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
