//! Board structure with round and match tracking
//!
//! The board owns both players and the occupancy cache. Game rules that
//! mutate it (move execution, undo, reset) live in [`crate::rules`].

use super::player::{Player, SumoLevel};
use super::{Color, Pos, Side, BOARD_SIZE, NUM_COLORS};
use crate::rules::MoveError;

/// Points needed to win a match unless configured otherwise
pub const DEFAULT_WINNING_POINTS: u32 = 15;

/// Game board with turn, round and match state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupancy cache, true iff some stone stands on the cell
    pub(crate) occupied: [[bool; BOARD_SIZE]; BOARD_SIZE],
    /// Indexed by [`Side::index`]
    pub(crate) players: [Player; 2],
    pub(crate) current_player: Side,
    /// Color that must move next; None before the first move of a round
    pub(crate) current_color: Option<Color>,
    pub(crate) round_over: bool,
    /// Side that won the most recent round
    pub(crate) round_winner: Option<Side>,
    /// Match winner
    pub(crate) winner: Option<Side>,
    pub(crate) turn_count: u32,
    pub(crate) winning_points: u32,
}

impl Board {
    pub fn new() -> Self {
        Self::with_winning_points(DEFAULT_WINNING_POINTS)
    }

    /// Fresh board for a match played to `winning_points`
    pub fn with_winning_points(winning_points: u32) -> Self {
        let players = [Player::new(Side::First), Player::new(Side::Second)];
        Self::from_players(players, winning_points)
    }

    /// Board with custom stone layouts (both sides at sumo level 0).
    ///
    /// Fails with [`MoveError::InvalidSetup`] if a stone is off the board
    /// or two stones share a cell.
    pub fn from_stones(
        first: [Pos; NUM_COLORS],
        second: [Pos; NUM_COLORS],
    ) -> Result<Self, MoveError> {
        let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
        for pos in first.iter().chain(second.iter()) {
            if !pos.is_in_bounds() {
                return Err(MoveError::InvalidSetup("stone off the board"));
            }
            let cell = &mut seen[pos.row as usize][pos.col as usize];
            if *cell {
                return Err(MoveError::InvalidSetup("two stones on one cell"));
            }
            *cell = true;
        }
        let players = [
            Player::with_stones(Side::First, first),
            Player::with_stones(Side::Second, second),
        ];
        Ok(Self::from_players(players, DEFAULT_WINNING_POINTS))
    }

    fn from_players(players: [Player; 2], winning_points: u32) -> Self {
        let mut board = Self {
            occupied: [[false; BOARD_SIZE]; BOARD_SIZE],
            players,
            current_player: Side::First,
            current_color: None,
            round_over: false,
            round_winner: None,
            winner: None,
            turn_count: 0,
            winning_points,
        };
        board.rebuild_occupancy();
        board
    }

    /// Check if a cell holds a stone (off-board cells are never occupied)
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        pos.is_in_bounds() && self.occupied[pos.row as usize][pos.col as usize]
    }

    /// Side and color of the stone on `pos`
    pub fn stone_at(&self, pos: Pos) -> Option<(Side, Color)> {
        if !self.is_occupied(pos) {
            return None;
        }
        self.players
            .iter()
            .find_map(|player| player.color_on(pos).map(|color| (player.side(), color)))
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[inline]
    pub(crate) fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Stone positions of a side, indexed by color
    #[inline]
    pub fn stones(&self, side: Side) -> &[Pos; NUM_COLORS] {
        self.player(side).stones()
    }

    /// Sumo levels of a side, indexed by color
    #[inline]
    pub fn sumo_levels(&self, side: Side) -> &[SumoLevel; NUM_COLORS] {
        self.player(side).sumo_levels()
    }

    #[inline]
    pub fn points(&self, side: Side) -> u32 {
        self.player(side).points()
    }

    /// Set a stone's sumo level (position setup, handicaps)
    pub fn set_sumo_level(&mut self, side: Side, color: Color, level: SumoLevel) {
        self.player_mut(side).set_sumo_level(color, level);
    }

    #[inline]
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    #[inline]
    pub fn current_color(&self) -> Option<Color> {
        self.current_color
    }

    #[inline]
    pub fn is_round_over(&self) -> bool {
        self.round_over
    }

    #[inline]
    pub fn round_winner(&self) -> Option<Side> {
        self.round_winner
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[inline]
    pub fn winning_points(&self) -> u32 {
        self.winning_points
    }

    /// Move a stone and keep the occupancy cache in sync.
    ///
    /// Panics if the stone's current cell is not marked occupied, which
    /// means the board state is corrupt.
    pub(crate) fn relocate(&mut self, side: Side, color: Color, to: Pos) {
        let from = self.player(side).stone(color);
        assert!(self.is_occupied(from), "inconsistent state: no stone at {from}");
        self.occupied[from.row as usize][from.col as usize] = false;
        self.occupied[to.row as usize][to.col as usize] = true;
        self.player_mut(side).set_stone(color, to);
    }

    pub(crate) fn rebuild_occupancy(&mut self) {
        self.occupied = [[false; BOARD_SIZE]; BOARD_SIZE];
        for player in &self.players {
            for pos in player.stones() {
                self.occupied[pos.row as usize][pos.col as usize] = true;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
