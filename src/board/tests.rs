use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::First.opponent(), Side::Second);
    assert_eq!(Side::Second.opponent(), Side::First);
}

#[test]
fn test_side_rows() {
    assert_eq!(Side::First.start_row(), 7);
    assert_eq!(Side::First.goal_row(), 0);
    assert_eq!(Side::First.forward(), -1);
    assert_eq!(Side::Second.start_row(), 0);
    assert_eq!(Side::Second.goal_row(), 7);
    assert_eq!(Side::Second.forward(), 1);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(5, 3);
    assert_eq!(pos.row, 5);
    assert_eq!(pos.col, 3);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);
    assert_eq!(Pos::from_index(28), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
    assert!(!Pos::new(8, 0).is_in_bounds());
    assert!(Pos::new(1, 0).is_in_bounds());
}

#[test]
fn test_pos_checked() {
    assert_eq!(Pos::checked(2, 6), Some(Pos::new(2, 6)));
    assert_eq!(Pos::checked(2, 8), None);
    assert_eq!(Pos::checked(-1, 3), None);
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(7, 0).offset(-1, 1), Pos::new(6, 1));
    assert!(!Pos::new(0, 0).offset(-1, 0).is_in_bounds());
}

#[test]
fn test_new_board_occupancy() {
    let board = Board::new();
    for col in 0..8 {
        assert!(board.is_occupied(Pos::new(0, col)));
        assert!(board.is_occupied(Pos::new(7, col)));
        for row in 1..7 {
            assert!(!board.is_occupied(Pos::new(row, col)));
        }
    }
    assert!(!board.is_occupied(Pos::new(8, 0)));
}

#[test]
fn test_new_board_state() {
    let board = Board::new();
    assert_eq!(board.current_player(), Side::First);
    assert_eq!(board.current_color(), None);
    assert!(!board.is_round_over());
    assert_eq!(board.winner(), None);
    assert_eq!(board.turn_count(), 0);
    assert_eq!(board.winning_points(), 15);
    assert_eq!(Board::with_winning_points(3).winning_points(), 3);
}

#[test]
fn test_stone_at() {
    let board = Board::new();
    assert_eq!(board.stone_at(Pos::new(7, 3)), Some((Side::First, 3)));
    assert_eq!(board.stone_at(Pos::new(0, 3)), Some((Side::Second, 4)));
    assert_eq!(board.stone_at(Pos::new(4, 4)), None);
}

#[test]
fn test_boards_own_their_state() {
    let mut a = Board::new();
    let b = Board::new();
    a.set_sumo_level(Side::First, 0, 2);
    assert_eq!(a.sumo_levels(Side::First)[0], 2);
    assert_eq!(b.sumo_levels(Side::First)[0], 0);
}

#[test]
fn test_from_stones_rejects_bad_layouts() {
    let mut first = *Board::new().stones(Side::First);
    let second = *Board::new().stones(Side::Second);

    first[0] = Pos::new(0, 0);
    assert!(Board::from_stones(first, second).is_err());

    first[0] = Pos::new(9, 0);
    assert!(Board::from_stones(first, second).is_err());

    first[0] = Pos::new(4, 4);
    let board = Board::from_stones(first, second).unwrap();
    assert!(board.is_occupied(Pos::new(4, 4)));
    assert!(!board.is_occupied(Pos::new(7, 0)));
}
