//! Board rendering for the Kamisado GUI

use crate::board::{color_at, Board, Pos, Side, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the view should highlight this frame
pub struct BoardOverlay<'a> {
    /// Destinations of the forced stone
    pub legal_moves: &'a [Pos],
    /// Cells the user may click right now
    pub clickable: &'a dyn Fn(Pos) -> bool,
    /// Origin and target of the last move
    pub last_move: Option<(Pos, Pos)>,
    /// Whether input is accepted at all
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        self.draw_cells(&painter);

        if let Some((from, to)) = overlay.last_move {
            self.draw_last_move(&painter, from, to);
        }

        self.draw_stones(&painter, board);
        self.draw_forced_stone(&painter, board);

        for &pos in overlay.legal_moves {
            let radius = self.cell_size * STONE_RADIUS_RATIO;
            painter.circle_stroke(
                self.cell_center(pos),
                radius,
                Stroke::new(OUTLINE_WIDTH, LEGAL_MOVE_OUTLINE),
            );
        }

        let mut clicked_pos = None;
        if overlay.interactive {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = (overlay.clickable)(board_pos);
                let hover_color = if is_valid { hover_valid() } else { hover_invalid() };
                painter.rect_filled(self.cell_rect(board_pos), CornerRadius::ZERO, hover_color);

                if response.clicked() && is_valid {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw the colored 8x8 cells
    fn draw_cells(&self, painter: &Painter) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, cell_color(color_at(pos)));
        }
    }

    /// Draw every stone of both sides
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for side in [Side::First, Side::Second] {
            let player = board.player(side);
            for (color, &pos) in player.stones().iter().enumerate() {
                self.draw_stone(painter, pos, side, color as u8, player.sumo_levels()[color]);
            }
        }
    }

    /// Side-colored body with a shadow, the stone's color as core, one ring per sumo level
    fn draw_stone(&self, painter: &Painter, pos: Pos, side: Side, color: u8, sumo_level: u8) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let (body, shadow) = stone_colors(side);

        painter.circle_filled(center + Vec2::splat(SHADOW_OFFSET), radius, shadow);
        painter.circle_filled(center, radius, body);
        painter.circle_filled(center, radius * COLOR_CORE_RATIO, cell_color(color));

        for ring in 0..sumo_level {
            let ring_radius = radius * COLOR_CORE_RATIO + SUMO_RING_WIDTH * (2.0 * ring as f32 + 1.5);
            painter.circle_stroke(center, ring_radius, Stroke::new(SUMO_RING_WIDTH, SUMO_RING));
        }
    }

    /// Mark the stone that has to move
    fn draw_forced_stone(&self, painter: &Painter, board: &Board) {
        if board.is_round_over() {
            return;
        }
        if let Some(color) = board.current_color() {
            let pos = board.player(board.current_player()).stone(color);
            let radius = self.cell_size * STONE_RADIUS_RATIO + OUTLINE_WIDTH;
            painter.circle_stroke(
                self.cell_center(pos),
                radius,
                Stroke::new(OUTLINE_WIDTH, FORCED_STONE_MARKER),
            );
        }
    }

    /// Thin line from the last origin to the last target
    fn draw_last_move(&self, painter: &Painter, from: Pos, to: Pos) {
        let stroke = Stroke::new(2.0, LAST_MOVE_MARKER);
        painter.line_segment([self.cell_center(from), self.cell_center(to)], stroke);
        painter.circle_filled(self.cell_center(from), 4.0, LAST_MOVE_MARKER);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        Pos::checked(row, col)
    }
}
