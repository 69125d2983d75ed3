//! Board rendering for the Hex GUI
//!
//! Cells are pointy-top hexagons in the odd-row offset layout: odd rows
//! are shifted half a cell to the right, matching the neighbor table used
//! by the engine.

use crate::{Board, Pos, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use super::theme::*;

const SQRT_3: f32 = 1.732_050_8;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Hexagon radius (center to vertex)
    radius: f32,
    /// Center of cell (0, 0)
    origin: Pos2,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            radius: 20.0,
            origin: Pos2::ZERO,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Stone,
        last_move: Option<Pos>,
        winning_path: Option<&[Pos]>,
        accept_input: bool,
    ) -> Option<Pos> {
        let size = board.size() as f32;
        let available = ui.available_size();

        // Fit the width (size + half a cell of row shift) and the height
        let fit_w = (available.x - 2.0 * BOARD_MARGIN) / (SQRT_3 * (size + 0.5));
        let fit_h = (available.y - 2.0 * BOARD_MARGIN) / (1.5 * (size - 1.0) + 2.0);
        self.radius = fit_w.min(fit_h).max(4.0);

        let (response, painter) = ui.allocate_painter(available, Sense::click());
        self.board_rect = response.rect;

        let board_w = SQRT_3 * self.radius * (size + 0.5);
        let board_h = self.radius * (1.5 * (size - 1.0) + 2.0);
        let top_left = self.board_rect.center() - Vec2::new(board_w, board_h) / 2.0;
        self.origin = top_left + Vec2::new(SQRT_3 * self.radius / 2.0, self.radius);

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_cells(&painter, board);
        self.draw_goal_edges(&painter, board.size());
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(path) = winning_path {
            self.draw_winning_path(&painter, path);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos, board.size()) {
                    let is_valid = board.is_available(board_pos);
                    let color = if is_valid {
                        stone_preview(current_turn)
                    } else {
                        hover_invalid()
                    };
                    painter.circle_filled(self.board_to_screen(board_pos), self.stone_radius(), color);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    #[inline]
    fn stone_radius(&self) -> f32 {
        self.radius * STONE_RADIUS_RATIO
    }

    /// Vertex `i` of the hexagon around `center`, clockwise from the
    /// upper-right (screen y grows downwards)
    fn vertex(&self, center: Pos2, i: usize) -> Pos2 {
        let angle = (60.0 * i as f32 - 30.0).to_radians();
        center + Vec2::new(angle.cos(), angle.sin()) * self.radius
    }

    fn hexagon(&self, center: Pos2) -> Vec<Pos2> {
        (0..6).map(|i| self.vertex(center, i)).collect()
    }

    /// Draw the empty hexagon grid
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(CELL_OUTLINE_WIDTH, CELL_OUTLINE);
        for idx in 0..board.grid().cell_count() {
            let center = self.board_to_screen(board.grid().to_pos(idx));
            painter.add(Shape::convex_polygon(self.hexagon(center), CELL_FILL, stroke));
        }
    }

    /// Color the outer hexagon sides with the owner of each edge
    fn draw_goal_edges(&self, painter: &Painter, size: usize) {
        let red = Stroke::new(GOAL_EDGE_WIDTH, RED_STONE);
        let blue = Stroke::new(GOAL_EDGE_WIDTH, BLUE_STONE);
        let last = size as i32 - 1;

        for i in 0..size as i32 {
            // vertices: 0 right-up, 1 right-down, 2 bottom, 3 left-down, 4 left-up, 5 top
            let north = self.board_to_screen(Pos::new(0, i));
            painter.line_segment([self.vertex(north, 4), self.vertex(north, 5)], red);
            painter.line_segment([self.vertex(north, 5), self.vertex(north, 0)], red);

            let south = self.board_to_screen(Pos::new(last, i));
            painter.line_segment([self.vertex(south, 1), self.vertex(south, 2)], red);
            painter.line_segment([self.vertex(south, 2), self.vertex(south, 3)], red);

            let west = self.board_to_screen(Pos::new(i, 0));
            painter.line_segment([self.vertex(west, 3), self.vertex(west, 4)], blue);

            let east = self.board_to_screen(Pos::new(i, last));
            painter.line_segment([self.vertex(east, 0), self.vertex(east, 1)], blue);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for idx in 0..board.grid().cell_count() {
            let stone = board.stone_at(idx);
            if stone != Stone::Empty {
                self.draw_stone(painter, board.grid().to_pos(idx), stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();
        let (main, highlight) = match stone {
            Stone::Blue => (BLUE_STONE, BLUE_STONE_HIGHLIGHT),
            Stone::Red => (RED_STONE, RED_STONE_HIGHLIGHT),
            Stone::Empty => return,
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        // Main stone
        painter.circle_filled(center, radius, main);

        // Highlight
        let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
        painter.circle_filled(center + highlight_offset, radius * 0.2, highlight);
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw the chain that won the game
    fn draw_winning_path(&self, painter: &Painter, path: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in path.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in path {
            let center = self.board_to_screen(*pos);
            painter.circle_stroke(center, self.stone_radius() + 3.0, stroke);
        }
    }

    /// Convert screen coordinates to board position
    ///
    /// Picks the nearest cell center; points outside every hexagon's
    /// inscribed circle map to nothing.
    pub fn screen_to_board(&self, screen_pos: Pos2, size: usize) -> Option<Pos> {
        let row_step = 1.5 * self.radius;
        let approx_row = ((screen_pos.y - self.origin.y) / row_step).round() as i32;
        let inner_radius = SQRT_3 * self.radius / 2.0;

        let mut best: Option<(Pos, f32)> = None;
        for row in approx_row - 1..=approx_row + 1 {
            if row < 0 || row >= size as i32 {
                continue;
            }
            let shift = if row % 2 == 1 { 0.5 } else { 0.0 };
            let approx_col =
                ((screen_pos.x - self.origin.x) / (SQRT_3 * self.radius) - shift).round() as i32;
            for col in approx_col - 1..=approx_col + 1 {
                if col < 0 || col >= size as i32 {
                    continue;
                }
                let pos = Pos::new(row, col);
                let dist = self.board_to_screen(pos).distance(screen_pos);
                if best.map_or(true, |(_, d)| dist < d) {
                    best = Some((pos, dist));
                }
            }
        }

        best.filter(|&(_, d)| d <= inner_radius).map(|(pos, _)| pos)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let width = SQRT_3 * self.radius;
        let shift = if pos.row % 2 == 1 { 0.5 } else { 0.0 };
        let x = self.origin.x + (pos.col as f32 + shift) * width;
        let y = self.origin.y + pos.row as f32 * 1.5 * self.radius;
        Pos2::new(x, y)
    }
}
