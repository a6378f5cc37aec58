//! Heuristic evaluation function for Kamisado positions
//!
//! This module provides the static evaluation used at the leaves of the
//! alpha-beta search. It scores a position for the side to move based on:
//! - An immediate winning move for the forced stone
//! - How many stones could win right away if they were forced next
//! - How many different colors each stone can hand to the opponent
//!
//! Scores are in eighths so the color-diversity average stays integral.

use crate::board::{color_at, Board, Color, Side, NUM_COLORS};

/// Score of a position where the side to move wins with its next move
pub const IMMEDIATE_WIN: i32 = 1_000_000;

/// Weight of one stone with a winning move, in eighths
const WINNING_STONE_WEIGHT: i32 = NUM_COLORS as i32;

/// Evaluate the board for the side to move.
///
/// Returns [`IMMEDIATE_WIN`] when the forced stone can reach the goal row,
/// otherwise `8 * (winning stones diff) + (reachable colors diff summed over
/// all stones)`. The board is only read.
#[must_use]
pub fn score_position(board: &Board) -> i32 {
    let me = board.current_player();
    if let Some(color) = board.current_color() {
        if has_winning_move(board, me, color) {
            return IMMEDIATE_WIN;
        }
    }

    let opponent = me.opponent();
    let winning_diff = winning_stone_count(board, me) as i32 - winning_stone_count(board, opponent) as i32;
    let diversity_diff = color_diversity(board, me) as i32 - color_diversity(board, opponent) as i32;
    winning_diff * WINNING_STONE_WEIGHT + diversity_diff
}

/// Whether `side`'s stone of `color` could reach the opponent's home row now
pub fn has_winning_move(board: &Board, side: Side, color: Color) -> bool {
    let goal = side.goal_row();
    board
        .legal_moves_for(side, color)
        .iter()
        .any(|pos| pos.row == goal)
}

/// Number of `side`'s stones that would win if they were forced next
pub fn winning_stone_count(board: &Board, side: Side) -> usize {
    (0..NUM_COLORS as Color)
        .filter(|&color| has_winning_move(board, side, color))
        .count()
}

/// Distinct destination colors available to `side`'s stone of `color`
pub fn reachable_colors(board: &Board, side: Side, color: Color) -> u32 {
    board
        .legal_moves_for(side, color)
        .iter()
        .fold(0u8, |mask, &pos| mask | (1 << color_at(pos)))
        .count_ones()
}

/// Sum of [`reachable_colors`] over all of `side`'s stones (eight times the average)
pub fn color_diversity(board: &Board, side: Side) -> u32 {
    (0..NUM_COLORS as Color)
        .map(|color| reachable_colors(board, side, color))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_opening_is_balanced() {
        let mut board = Board::new();
        board.set_color(0).unwrap();
        // Mirror-symmetric start: same counts for both sides
        assert_eq!(
            color_diversity(&board, Side::First),
            color_diversity(&board, Side::Second)
        );
        assert_eq!(winning_stone_count(&board, Side::First), 0);
        assert_eq!(score_position(&board), 0);
    }

    #[test]
    fn test_score_is_pure() {
        let mut board = Board::new();
        board.set_color(4).unwrap();
        board.perform_move(Pos::new(4, 4)).unwrap();
        let before = board.clone();
        let a = score_position(&board);
        let b = score_position(&board);
        assert_eq!(a, b);
        assert_eq!(board, before);
    }

    #[test]
    fn test_immediate_win_detected() {
        let mut first = *Board::new().stones(Side::First);
        first[0] = Pos::new(2, 3);
        let mut second = *Board::new().stones(Side::Second);
        second[4] = Pos::new(3, 0);
        let mut board = Board::from_stones(first, second).unwrap();
        board.set_color(0).unwrap();

        assert!(has_winning_move(&board, Side::First, 0));
        assert_eq!(score_position(&board), IMMEDIATE_WIN);
        assert!(winning_stone_count(&board, Side::First) >= 1);
    }

    #[test]
    fn test_reachable_colors_bounded() {
        let board = Board::new();
        for color in 0..8 {
            let n = reachable_colors(&board, Side::First, color);
            assert!(n >= 1 && n <= 8);
        }
    }
}
