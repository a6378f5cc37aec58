//! Theme constants for the Kamisado GUI

use egui::Color32;

use crate::board::{Color, Side, NUM_COLORS};

// Cell colors, indexed by board color
pub const CELL_COLORS: [Color32; NUM_COLORS] = [
    Color32::from_rgb(87, 37, 0),     // Brown
    Color32::from_rgb(0, 162, 95),    // Green
    Color32::from_rgb(240, 60, 70),   // Red
    Color32::from_rgb(255, 222, 0),   // Yellow
    Color32::from_rgb(239, 128, 179), // Pink
    Color32::from_rgb(124, 66, 153),  // Purple
    Color32::from_rgb(0, 120, 200),   // Blue
    Color32::from_rgb(245, 132, 40),  // Orange
];

pub const BOARD_BORDER: Color32 = Color32::from_rgb(40, 30, 20);

// Stone bodies and their drop shadows
pub const FIRST_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const FIRST_STONE_SHADOW: Color32 = Color32::from_rgb(80, 80, 80);
pub const SECOND_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const SECOND_STONE_SHADOW: Color32 = Color32::from_rgb(120, 120, 120);

// Markers
pub const LEGAL_MOVE_OUTLINE: Color32 = Color32::WHITE;
pub const SUMO_RING: Color32 = Color32::from_rgb(210, 170, 60);
pub const FORCED_STONE_MARKER: Color32 = Color32::from_rgb(50, 220, 50);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 70)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 70)
}

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const STONE_RADIUS_RATIO: f32 = 0.42;
pub const COLOR_CORE_RATIO: f32 = 0.5;
pub const SHADOW_OFFSET: f32 = 3.0;
pub const SUMO_RING_WIDTH: f32 = 2.5;
pub const OUTLINE_WIDTH: f32 = 3.0;

/// Fill color of a cell or stone core
pub fn cell_color(color: Color) -> Color32 {
    CELL_COLORS[color as usize % NUM_COLORS]
}

/// Body and shadow color of a side's stones
pub fn stone_colors(side: Side) -> (Color32, Color32) {
    match side {
        Side::First => (FIRST_STONE, FIRST_STONE_SHADOW),
        Side::Second => (SECOND_STONE, SECOND_STONE_SHADOW),
    }
}
