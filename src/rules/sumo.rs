//! Sumo pushes
//!
//! A stone with sumo level > 0 may step straight forward onto an occupied
//! cell and shove the contiguous run of stones in front of it one cell
//! further. The run must consist of weaker opposing stones, must not exceed
//! the pusher's power, and must have an empty landing cell on the board.

use crate::board::{Board, Color, Pos, Side, SumoStats};

use super::MoveError;

impl Board {
    /// Validate a sumo push by the forced stone onto `target`.
    ///
    /// Returns the empty cell the last pushed stone will land on.
    pub fn resolve_sumo(&self, target: Pos) -> Result<Pos, MoveError> {
        let color = self.current_color.ok_or(MoveError::ColorNotSet)?;
        self.resolve_sumo_for(self.current_player, color, target)
    }

    /// Validate a push by `side`'s stone of `color` onto `target`, without
    /// regard to whose turn it is.
    pub fn resolve_sumo_for(
        &self,
        side: Side,
        color: Color,
        target: Pos,
    ) -> Result<Pos, MoveError> {
        let level = self.player(side).sumo_level(color);
        let forward = side.forward();

        let mut cell = target;
        let mut run: u8 = 0;
        while self.is_occupied(cell) {
            // is_occupied implies a stone is there
            let (owner, pushed_color) = match self.stone_at(cell) {
                Some(stone) => stone,
                None => unreachable!("occupancy cache out of sync at {cell}"),
            };
            if owner == side {
                return Err(MoveError::PushOwnStone);
            }
            if self.player(owner).sumo_level(pushed_color) >= level {
                return Err(MoveError::PushTooStrong);
            }
            run += 1;
            cell = cell.offset(forward, 0);
        }

        if !cell.is_in_bounds() {
            return Err(MoveError::PushOffBoard);
        }
        if run > SumoStats::for_level(level).power {
            return Err(MoveError::PushLimitExceeded);
        }
        Ok(cell)
    }

    /// Shift every stone from `first` up to (excluding) `landing` one cell
    /// along `step`, starting at the landing end so no stone is overwritten.
    pub(crate) fn shift_run(&mut self, first: Pos, landing: Pos, step: i8) {
        let mut cell = landing.offset(-step, 0);
        loop {
            let (owner, color) = match self.stone_at(cell) {
                Some(stone) => stone,
                None => panic!("inconsistent state: sumo run broken at {cell}"),
            };
            self.relocate(owner, color, cell.offset(step, 0));
            if cell == first {
                break;
            }
            cell = cell.offset(-step, 0);
        }
    }
}
