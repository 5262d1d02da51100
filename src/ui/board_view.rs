//! Board rendering for the Connect Four GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::{rules, Disc};

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
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &[Vec<Disc>],
        current_turn: Disc,
        last_move: Option<(usize, usize)>,
        suggested_column: Option<usize>,
        winning_line: Option<&[(usize, usize)]>,
        game_over: bool,
    ) -> Option<usize> {
        let cols = board.len();
        let rows = board.first().map_or(0, Vec::len);
        if cols == 0 || rows == 0 {
            return None;
        }

        let available = ui.available_size() - Vec2::splat(20.0);
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols as f32)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows as f32)
            .max(10.0);

        let size = Vec2::new(
            cols as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            rows as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        // Board frame
        painter.rect_filled(
            self.board_rect.translate(Vec2::new(3.0, 3.0)),
            CornerRadius::same(10),
            BOARD_SHADOW,
        );
        painter.rect_filled(self.board_rect, CornerRadius::same(10), BOARD_BG);

        // Hover highlight behind the holes
        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_column(p, cols))
            .filter(|_| !game_over);
        if let Some(col) = hovered {
            painter.rect_filled(self.column_rect(col, rows), CornerRadius::same(6), hover_column());
        }

        self.draw_discs(&painter, board);

        if let Some((col, row)) = last_move {
            painter.circle_filled(self.cell_center(col, row), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(col) = suggested_column {
            self.draw_suggestion(&painter, board, col, current_turn);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw every hole, filled or not
    fn draw_discs(&self, painter: &Painter, board: &[Vec<Disc>]) {
        for (col, column) in board.iter().enumerate() {
            for (row, &disc) in column.iter().enumerate() {
                self.draw_disc(painter, col, row, disc);
            }
        }
    }

    fn draw_disc(&self, painter: &Painter, col: usize, row: usize, disc: Disc) {
        let center = self.cell_center(col, row);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let (fill, highlight) = match disc {
            Disc::Red => (RED_DISC, RED_DISC_HIGHLIGHT),
            Disc::Yellow => (YELLOW_DISC, YELLOW_DISC_HIGHLIGHT),
            Disc::Empty => {
                painter.circle_filled(center, radius, HOLE);
                return;
            }
        };

        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius * 0.75, Stroke::new(radius * 0.08, highlight));
    }

    /// Ring the winning discs and join them
    fn draw_winning_line(&self, painter: &Painter, line: &[(usize, usize)]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment(
                [self.cell_center(pair[0].0, pair[0].1), self.cell_center(pair[1].0, pair[1].1)],
                stroke,
            );
        }
        for &(col, row) in line {
            let radius = self.cell_size * DISC_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.cell_center(col, row), radius, stroke);
        }
    }

    /// Ghost disc where the suggested move would land
    fn draw_suggestion(&self, painter: &Painter, board: &[Vec<Disc>], col: usize, turn: Disc) {
        let Some(row) = rules::landing_row(board, col) else {
            return;
        };
        let color = match turn {
            Disc::Red => RED_DISC,
            Disc::Yellow => YELLOW_DISC,
            Disc::Empty => return,
        };

        let center = self.cell_center(col, row);
        painter.circle_filled(center, self.cell_size * DISC_RADIUS_RATIO, ghost(color));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(18.0),
            Color32::BLACK,
        );
    }

    /// Column under a screen position
    pub fn screen_to_column(&self, screen_pos: Pos2, cols: usize) -> Option<usize> {
        let x = (screen_pos.x - self.board_rect.min.x - BOARD_MARGIN) / self.cell_size;
        (x >= 0.0 && (x as usize) < cols).then(|| x as usize)
    }

    /// Center of a hole in raw coordinates (row 0 at the top)
    pub fn cell_center(&self, col: usize, row: usize) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }

    fn column_rect(&self, col: usize, rows: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(BOARD_MARGIN + col as f32 * self.cell_size, BOARD_MARGIN);
        Rect::from_min_size(min, Vec2::new(self.cell_size, rows as f32 * self.cell_size))
    }
}
