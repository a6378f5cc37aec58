//! Path checking and legal move generation
//!
//! Stones only travel forward: straight ahead or along one of the two
//! forward diagonals, any number of empty cells up to their sumo range.

use crate::board::{Board, Color, Pos, Side, SumoStats, BOARD_SIZE};

use super::MoveError;

/// Column steps of the three forward rays: left diagonal, straight, right diagonal
const RAY_COLUMN_STEPS: [i8; 3] = [-1, 0, 1];

impl Board {
    /// Check that the side to move could travel from `start` to `target`.
    ///
    /// Range and sumo rules are not considered here.
    pub fn check_path_clear(&self, start: Pos, target: Pos) -> Result<(), MoveError> {
        self.check_path_clear_for(self.current_player, start, target)
    }

    /// Path check for an arbitrary side
    pub fn check_path_clear_for(
        &self,
        side: Side,
        start: Pos,
        target: Pos,
    ) -> Result<(), MoveError> {
        if self.is_occupied(target) {
            return Err(MoveError::OccupiedTarget);
        }
        let forward = side.forward();
        let rows = (target.row - start.row) * forward;
        if rows <= 0 {
            return Err(MoveError::WrongDirection);
        }
        let d_col = target.col - start.col;
        if d_col != 0 && d_col.abs() != rows {
            return Err(MoveError::NotStraightOrDiagonal);
        }

        let col_step = d_col.signum();
        let blocked = (1..rows)
            .map(|step| start.offset(forward * step, col_step * step))
            .any(|cell| self.is_occupied(cell));
        if blocked {
            return Err(MoveError::Blocked);
        }
        Ok(())
    }

    /// Every legal destination of the forced stone.
    ///
    /// Empty when the round is over or no color has been chosen yet.
    pub fn get_legal_moves(&self) -> Vec<Pos> {
        if self.round_over {
            return Vec::new();
        }
        match self.current_color {
            Some(color) => self.legal_moves_for(self.current_player, color),
            None => Vec::new(),
        }
    }

    /// Legal destinations of `side`'s stone of `color`, as if it were its turn
    pub fn legal_moves_for(&self, side: Side, color: Color) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(3 * BOARD_SIZE);
        self.collect_moves_for(side, color, &mut moves);
        moves
    }

    /// Same as [`Board::legal_moves_for`], appending into `moves`
    pub fn collect_moves_for(&self, side: Side, color: Color, moves: &mut Vec<Pos>) {
        let player = self.player(side);
        let origin = player.stone(color);
        let level = player.sumo_level(color);
        let range = SumoStats::for_level(level).range;
        let forward = side.forward();

        for d_col in RAY_COLUMN_STEPS {
            for step in 1..BOARD_SIZE as i8 {
                let cell = origin.offset(forward * step, d_col * step);
                if !cell.is_in_bounds() {
                    break;
                }
                if self.is_occupied(cell) {
                    let can_push = step == 1
                        && d_col == 0
                        && level > 0
                        && self.resolve_sumo_for(side, color, cell).is_ok();
                    if can_push {
                        moves.push(cell);
                    }
                    break;
                }
                if step > range {
                    break;
                }
                moves.push(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_moves_before_color_chosen() {
        let board = Board::new();
        assert!(board.get_legal_moves().is_empty());
    }

    #[test]
    fn test_opening_moves() {
        let mut board = Board::new();
        board.set_color(3).unwrap();
        // (7, 3): straight 6 cells, left diagonal 3, right diagonal 4
        let moves = board.get_legal_moves();
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(&Pos::new(1, 3)));
        assert!(moves.contains(&Pos::new(4, 0)));
        assert!(moves.contains(&Pos::new(3, 7)));
        assert!(!moves.contains(&Pos::new(0, 3)));
    }

    #[test]
    fn test_moves_after_first_move() {
        let mut board = Board::new();
        board.set_color(0).unwrap();
        board.perform_move(Pos::new(6, 0)).unwrap();
        let moves: HashSet<Pos> = board.get_legal_moves().into_iter().collect();
        let expected: HashSet<Pos> = [
            (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2),
            (1, 1), (2, 0),
            (1, 3), (2, 4), (3, 5), (4, 6), (5, 7),
        ]
        .into_iter()
        .map(|(r, c)| Pos::new(r, c))
        .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_range_limits_moves() {
        let mut board = Board::new();
        board.set_sumo_level(Side::First, 3, 2);
        board.set_color(3).unwrap();
        let moves = board.get_legal_moves();
        assert!(moves.contains(&Pos::new(4, 3)));
        assert!(!moves.contains(&Pos::new(3, 3)));
        assert!(moves.iter().all(|m| m.row >= 4));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut board = Board::new();
        board.set_color(5).unwrap();
        assert_eq!(board.get_legal_moves(), board.get_legal_moves());
    }

    #[test]
    fn test_path_errors() {
        let mut board = Board::new();
        board.set_color(0).unwrap();
        let start = Pos::new(7, 0);
        assert_eq!(board.check_path_clear(start, Pos::new(0, 0)), Err(MoveError::OccupiedTarget));
        assert_eq!(board.check_path_clear(start, Pos::new(7, 0)), Err(MoveError::OccupiedTarget));
        assert_eq!(
            board.check_path_clear(Pos::new(5, 0), Pos::new(6, 0)),
            Err(MoveError::WrongDirection)
        );
        assert_eq!(
            board.check_path_clear(start, Pos::new(5, 1)),
            Err(MoveError::NotStraightOrDiagonal)
        );
        assert_eq!(board.check_path_clear(start, Pos::new(3, 4)), Ok(()));
    }

    #[test]
    fn test_blocked_path() {
        let mut first = *Board::new().stones(Side::First);
        first[1] = Pos::new(5, 2);
        let second = *Board::new().stones(Side::Second);
        let mut board = Board::from_stones(first, second).unwrap();
        board.set_color(0).unwrap();
        assert_eq!(
            board.check_path_clear(Pos::new(7, 0), Pos::new(3, 4)),
            Err(MoveError::Blocked)
        );
    }

    #[test]
    fn test_sumo_push_is_listed_only_when_legal() {
        let mut first = *Board::new().stones(Side::First);
        first[0] = Pos::new(4, 4);
        let mut second = *Board::new().stones(Side::Second);
        second[0] = Pos::new(3, 4);
        let mut board = Board::from_stones(first, second).unwrap();
        board.set_color(0).unwrap();
        assert!(!board.get_legal_moves().contains(&Pos::new(3, 4)));

        board.set_sumo_level(Side::First, 0, 1);
        assert!(board.get_legal_moves().contains(&Pos::new(3, 4)));
    }
}
