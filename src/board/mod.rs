//! Board representation for Kamisado

pub mod board;
pub mod colors;
pub mod player;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, DEFAULT_WINNING_POINTS};
pub use colors::{color_at, color_name, Color, NUM_COLORS};
pub use player::{Player, SumoLevel, SumoStats, MAX_SUMO_LEVEL};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;

/// Highest row/column index
pub const LAST_INDEX: i8 = BOARD_SIZE as i8 - 1;

/// The two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on row 7 and moves toward row 0
    First,
    /// Starts on row 0 and moves toward row 7
    Second,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Index into per-side arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Home row of this side's stones
    #[inline]
    pub fn start_row(self) -> i8 {
        match self {
            Side::First => LAST_INDEX,
            Side::Second => 0,
        }
    }

    /// Row step of a forward move
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Side::First => -1,
            Side::Second => 1,
        }
    }

    /// Row this side has to reach to win a round
    #[inline]
    pub fn goal_row(self) -> i8 {
        self.opponent().start_row()
    }
}

/// Position on the board.
///
/// Coordinates are signed so rays and user input can step off the grid;
/// use [`Pos::is_in_bounds`] or [`Pos::checked`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Bounds-checked constructor
    #[inline]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self::new(row as i8, col as i8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    #[inline]
    pub fn is_in_bounds(self) -> bool {
        Self::is_valid(self.row as i32, self.col as i32)
    }

    /// Position shifted by a row/column delta (may leave the board)
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        debug_assert!(self.is_in_bounds());
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self::new((idx / BOARD_SIZE) as i8, (idx % BOARD_SIZE) as i8)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
