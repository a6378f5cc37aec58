//! Move execution, undo and round reset
//!
//! [`Board::perform_move`] is the only way stones travel during play. It
//! validates everything before touching the board and returns a
//! [`MoveRecord`] holding exactly what it changed, so
//! [`Board::undo_move`] can restore the previous state without copies.

use log::debug;

use crate::board::{
    color_at, Board, Color, Pos, Side, SumoLevel, SumoStats, MAX_SUMO_LEVEL, NUM_COLORS,
};

use super::MoveError;

/// Sumo push performed by a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumoPush {
    /// First pushed cell (where the pusher ends up)
    pub first: Pos,
    /// Cell the last pushed stone landed on
    pub landing: Pos,
}

/// How a move ended the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play passes to the opponent
    Continue,
    /// The opponent was stalled and skipped; the mover moves again
    Skipped,
    /// The mover reached the opponent's home row
    RoundWon,
    /// Neither side could move; the skipped opponent takes the round
    Deadlock,
}

/// A round result produced by a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    pub side: Side,
    pub color: Color,
    /// Sumo level of the scoring stone before it was promoted
    pub previous_level: SumoLevel,
    /// Whether this round decided the match
    pub won_match: bool,
}

/// Everything [`Board::perform_move`] changed, for an exact undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mover: Side,
    pub moved_color: Color,
    pub origin: Pos,
    pub target: Pos,
    pub sumo: Option<SumoPush>,
    pub outcome: MoveOutcome,
    pub scoring: Option<Scoring>,
    previous_color: Option<Color>,
    previous_round_winner: Option<Side>,
}

impl MoveRecord {
    /// Whether this move finished the round (win or deadlock)
    #[inline]
    pub fn ended_round(&self) -> bool {
        self.scoring.is_some()
    }
}

impl Board {
    /// Choose the color that opens the round.
    pub fn set_color(&mut self, color: Color) -> Result<(), MoveError> {
        if self.round_over {
            return Err(MoveError::RoundOver);
        }
        if color as usize >= NUM_COLORS {
            return Err(MoveError::InvalidColor(color));
        }
        if self.current_color.is_some() || self.turn_count > 0 {
            return Err(MoveError::ColorAlreadySet);
        }
        self.current_color = Some(color);
        Ok(())
    }

    /// Move the forced stone to `target`.
    ///
    /// A one-step straight move onto an occupied cell is a sumo push when the
    /// stone has a sumo level. On success the returned record can be passed
    /// to [`Board::undo_move`].
    pub fn perform_move(&mut self, target: Pos) -> Result<MoveRecord, MoveError> {
        if self.round_over {
            return Err(MoveError::RoundOver);
        }
        let color = self.current_color.ok_or(MoveError::ColorNotSet)?;
        if !target.is_in_bounds() {
            return Err(MoveError::OutOfBounds);
        }

        let mover = self.current_player;
        let origin = self.player(mover).stone(color);
        let level = self.player(mover).sumo_level(color);
        assert!(self.is_occupied(origin), "inconsistent state: no stone at {origin}");

        let sumo = match self.check_path_clear(origin, target) {
            Ok(()) => {
                if (target.row - origin.row).abs() > SumoStats::for_level(level).range {
                    return Err(MoveError::RangeExceeded);
                }
                None
            }
            Err(MoveError::OccupiedTarget)
                if level > 0
                    && target.row - origin.row == mover.forward()
                    && target.col == origin.col =>
            {
                let landing = self.resolve_sumo(target)?;
                Some(SumoPush { first: target, landing })
            }
            Err(e) => return Err(e),
        };

        let mut record = MoveRecord {
            mover,
            moved_color: color,
            origin,
            target,
            sumo,
            outcome: MoveOutcome::Continue,
            scoring: None,
            previous_color: self.current_color,
            previous_round_winner: self.round_winner,
        };

        if let Some(push) = sumo {
            self.shift_run(push.first, push.landing, mover.forward());
        }
        self.relocate(mover, color, target);
        self.turn_count += 1;

        if target.row == mover.goal_row() {
            record.outcome = MoveOutcome::RoundWon;
            record.scoring = Some(self.score_round(mover, color));
            return Ok(record);
        }

        let landed = sumo.map_or(target, |push| push.landing);
        let opponent = mover.opponent();
        self.hand_over(opponent, color_at(landed));
        if self.has_any_move() {
            return Ok(record);
        }

        // Opponent is stuck: its stalled stone's cell picks the mover's next color
        record.outcome = MoveOutcome::Skipped;
        let stalled = self.player(opponent).stone(self.forced_color());
        self.hand_over(mover, color_at(stalled));
        if self.has_any_move() {
            debug!("{opponent:?} skipped, {mover:?} moves again");
            return Ok(record);
        }

        record.outcome = MoveOutcome::Deadlock;
        let stalled = self.player(mover).stone(self.forced_color());
        self.hand_over(opponent, color_at(stalled));
        debug!("deadlock after {mover:?} moved to {target}");
        record.scoring = Some(self.score_round(opponent, self.forced_color()));
        Ok(record)
    }

    /// Revert the move described by `record`.
    ///
    /// `record` must come from the most recent `perform_move` on this board.
    pub fn undo_move(&mut self, record: MoveRecord) {
        if let Some(scoring) = record.scoring {
            self.player_mut(scoring.side)
                .set_sumo_level(scoring.color, scoring.previous_level);
            self.round_over = false;
            if scoring.won_match {
                self.winner = None;
            }
        }
        self.round_winner = record.previous_round_winner;
        self.current_player = record.mover;
        self.current_color = record.previous_color;
        self.turn_count -= 1;

        self.relocate(record.mover, record.moved_color, record.origin);
        if let Some(push) = record.sumo {
            let back = -record.mover.forward();
            let mut cell = push.first.offset(-back, 0);
            loop {
                let (owner, color) = match self.stone_at(cell) {
                    Some(stone) => stone,
                    None => panic!("inconsistent state: pushed stone missing at {cell}"),
                };
                self.relocate(owner, color, cell.offset(back, 0));
                if cell == push.landing {
                    break;
                }
                cell = cell.offset(-back, 0);
            }
        }
    }

    /// Start the next round once the current one is over.
    ///
    /// Both sides refill their home rows keeping the order of their stones;
    /// `from_right` fills from the first side's right-hand edge. The loser
    /// of the finished round opens the new one.
    pub fn reset(&mut self, from_right: bool) -> Result<(), MoveError> {
        if !self.round_over {
            return Err(MoveError::RoundNotOver);
        }
        if self.winner.is_some() {
            return Err(MoveError::MatchOver);
        }
        self.player_mut(Side::First).reset_stones(from_right);
        self.player_mut(Side::Second).reset_stones(!from_right);
        self.rebuild_occupancy();

        self.current_player = self
            .round_winner
            .map_or(Side::First, |winner| winner.opponent());
        self.current_color = None;
        self.turn_count = 0;
        self.round_over = false;
        Ok(())
    }

    fn hand_over(&mut self, side: Side, color: Color) {
        self.current_player = side;
        self.current_color = Some(color);
    }

    #[inline]
    fn forced_color(&self) -> Color {
        match self.current_color {
            Some(color) => color,
            None => unreachable!("forced color is set during play"),
        }
    }

    fn has_any_move(&self) -> bool {
        !self
            .legal_moves_for(self.current_player, self.forced_color())
            .is_empty()
    }

    fn score_round(&mut self, side: Side, color: Color) -> Scoring {
        let previous_level = self.player(side).sumo_level(color);
        self.player_mut(side)
            .set_sumo_level(color, (previous_level + 1).min(MAX_SUMO_LEVEL));
        self.round_over = true;
        self.round_winner = Some(side);

        let points = self.points(side);
        let won_match = self.winner.is_none() && points >= self.winning_points;
        if won_match {
            self.winner = Some(side);
        }
        debug!("{side:?} takes the round with color {color}, {points} points");
        Scoring {
            side,
            color,
            previous_level,
            won_match,
        }
    }
}
