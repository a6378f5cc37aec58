//! End-to-end rule scenarios through the public API

use kamisado::board::{Player, SumoStats};
use kamisado::eval::score_position;
use kamisado::{color_at, AIEngine, Board, MoveError, MoveOutcome, Pos, Side};

fn positions(cells: [(i8, i8); 8]) -> [Pos; 8] {
    cells.map(|(r, c)| Pos::new(r, c))
}

#[test]
fn opening_move_forces_landing_color() {
    let mut board = Board::new();
    board.set_color(0).unwrap();
    let record = board.perform_move(Pos::new(5, 0)).unwrap();

    assert_eq!(record.outcome, MoveOutcome::Continue);
    assert_eq!(board.turn_count(), 1);
    assert_eq!(board.current_player(), Side::Second);
    assert_eq!(board.current_color(), Some(color_at(Pos::new(5, 0))));
}

#[test]
fn single_sumo_push_hands_over_landing_color() {
    let mut first = *Board::new().stones(Side::First);
    first[0] = Pos::new(4, 4);
    let mut second = *Board::new().stones(Side::Second);
    second[0] = Pos::new(3, 4);
    let mut board = Board::from_stones(first, second).unwrap();
    board.set_sumo_level(Side::First, 0, 1);
    board.set_color(0).unwrap();

    let record = board.perform_move(Pos::new(3, 4)).unwrap();

    assert!(record.sumo.is_some());
    assert_eq!(board.stone_at(Pos::new(3, 4)), Some((Side::First, 0)));
    assert_eq!(board.stone_at(Pos::new(2, 4)), Some((Side::Second, 0)));
    assert!(!board.is_occupied(Pos::new(4, 4)));
    assert_eq!(board.current_player(), Side::Second);
    assert_eq!(board.current_color(), Some(color_at(Pos::new(2, 4))));
}

#[test]
fn double_push_into_edge_and_off_board() {
    // Two-stone stack whose last stone lands exactly on the home row
    let mut first = *Board::new().stones(Side::First);
    first[0] = Pos::new(3, 7);
    let mut second = *Board::new().stones(Side::Second);
    second[0] = Pos::new(2, 7);
    second[1] = Pos::new(1, 7);
    let mut board = Board::from_stones(first, second).unwrap();
    board.set_sumo_level(Side::First, 0, 2);
    board.set_color(0).unwrap();

    board.perform_move(Pos::new(2, 7)).unwrap();
    assert_eq!(board.stone_at(Pos::new(2, 7)), Some((Side::First, 0)));
    assert_eq!(board.stone_at(Pos::new(1, 7)), Some((Side::Second, 0)));
    assert_eq!(board.stone_at(Pos::new(0, 7)), Some((Side::Second, 1)));

    // One cell further the stack would leave the board
    let mut first = *Board::new().stones(Side::First);
    first[0] = Pos::new(2, 7);
    let mut second = *Board::new().stones(Side::Second);
    second[0] = Pos::new(1, 7);
    second[1] = Pos::new(0, 7);
    let mut board = Board::from_stones(first, second).unwrap();
    board.set_sumo_level(Side::First, 0, 2);
    board.set_color(0).unwrap();
    let before = board.clone();

    assert_eq!(board.perform_move(Pos::new(1, 7)), Err(MoveError::PushOffBoard));
    assert_eq!(board, before);
}

#[test]
fn reset_from_right_keeps_relative_order() {
    let mut player = Player::with_stones(
        Side::First,
        positions([(7, 0), (7, 1), (7, 2), (6, 0), (6, 1), (6, 2), (0, 0), (1, 0)]),
    );
    player.reset_stones(true);
    assert_eq!(
        player.stones(),
        &positions([(7, 5), (7, 6), (7, 7), (7, 2), (7, 3), (7, 4), (7, 0), (7, 1)])
    );
}

#[test]
fn winning_a_round_promotes_and_reset_starts_next() {
    let mut first = *Board::new().stones(Side::First);
    first[3] = Pos::new(1, 4);
    let mut second = *Board::new().stones(Side::Second);
    // Free the goal cell in front of the runner
    second[4] = Pos::new(2, 0);
    let mut board = Board::from_stones(first, second).unwrap();
    board.set_color(3).unwrap();

    let record = board.perform_move(Pos::new(0, 3)).unwrap();
    assert_eq!(record.outcome, MoveOutcome::RoundWon);
    assert!(board.is_round_over());
    assert_eq!(board.round_winner(), Some(Side::First));
    assert_eq!(board.sumo_levels(Side::First)[3], 1);
    assert_eq!(board.points(Side::First), SumoStats::for_level(1).points);
    assert!(board.get_legal_moves().is_empty());
    assert_eq!(board.perform_move(Pos::new(6, 0)), Err(MoveError::RoundOver));

    board.reset(false).unwrap();
    assert!(!board.is_round_over());
    assert_eq!(board.current_player(), Side::Second);
    assert_eq!(board.current_color(), None);
    assert!(board.stones(Side::First).iter().all(|p| p.row == 7));
    assert!(board.stones(Side::Second).iter().all(|p| p.row == 0));
    assert_eq!(board.sumo_levels(Side::First)[3], 1);
}

#[test]
fn evaluation_does_not_mutate() {
    let mut board = Board::new();
    board.set_color(1).unwrap();
    board.perform_move(Pos::new(4, 1)).unwrap();
    let before = board.clone();
    assert_eq!(score_position(&board), score_position(&board));
    assert_eq!(board, before);
}

#[test]
fn engine_takes_the_win_when_available() {
    let mut first = *Board::new().stones(Side::First);
    first[0] = Pos::new(2, 3);
    let mut second = *Board::new().stones(Side::Second);
    second[4] = Pos::new(3, 0);
    let mut board = Board::from_stones(first, second).unwrap();
    board.set_color(0).unwrap();

    let mut engine = AIEngine::with_config(6, 500);
    let result = engine.get_move(&mut board, 500);
    assert_eq!(result.best_move, Some(Pos::new(0, 3)));
    assert!(result.summary.starts_with("forced win in 1 half-moves"));
}
