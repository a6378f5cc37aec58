//! Fixed coloring of the 64 cells
//!
//! Every cell carries one of eight colors. The table is a Latin square:
//! each row and each column holds every color exactly once. A stone's color
//! also names it, so the color of the cell a player lands on decides which
//! opposing stone must move next.

use super::{Pos, BOARD_SIZE};

/// Stone/cell color, 0..8
pub type Color = u8;

/// Number of colors (and stones per side)
pub const NUM_COLORS: usize = 8;

const BOARD_COLORS: [[Color; BOARD_SIZE]; BOARD_SIZE] = [
    [7, 6, 5, 4, 3, 2, 1, 0],
    [2, 7, 4, 1, 6, 3, 0, 5],
    [1, 4, 7, 2, 5, 0, 3, 6],
    [4, 5, 6, 7, 0, 1, 2, 3],
    [3, 2, 1, 0, 7, 6, 5, 4],
    [6, 3, 0, 5, 2, 7, 4, 1],
    [5, 0, 3, 6, 1, 4, 7, 2],
    [0, 1, 2, 3, 4, 5, 6, 7],
];

const COLOR_NAMES: [&str; NUM_COLORS] = [
    "Brown", "Green", "Red", "Yellow", "Pink", "Purple", "Blue", "Orange",
];

/// Color of the cell at `pos`. `pos` must be on the board.
#[inline]
pub fn color_at(pos: Pos) -> Color {
    debug_assert!(pos.is_in_bounds(), "color_at off the board: {pos}");
    BOARD_COLORS[pos.row as usize][pos.col as usize]
}

/// Human-readable name of a color
pub fn color_name(color: Color) -> &'static str {
    COLOR_NAMES.get(color as usize).copied().unwrap_or("?")
}
