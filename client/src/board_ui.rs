use eframe::egui;
use tictactoe_engine::tictactoe::{BOARD_SIZE, GameSession, GameStatus, Mark, Position};

pub struct BoardUi {
    last_hover: Option<Position>,
}

impl BoardUi {
    const LINE_WIDTH: f32 = 4.0;
    const MARK_WIDTH: f32 = 6.0;
    const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);
    const X_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
    const O_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 200, 220);

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    /// Maps a point inside `rect` to the cell under it.
    pub fn cell_at(rect: egui::Rect, pos: egui::Pos2) -> Option<Position> {
        if !rect.contains(pos) {
            return None;
        }
        let cell_size = rect.width().min(rect.height()) / BOARD_SIZE as f32;
        let col = ((pos.x - rect.left()) / cell_size) as usize;
        let row = ((pos.y - rect.top()) / cell_size) as usize;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    fn cell_rect(rect: egui::Rect, cell_size: f32, pos: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + pos.col as f32 * cell_size,
                rect.top() + pos.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    /// Draws the board and returns the cell clicked this frame, if any.
    /// Clicks are only reported while `accepts_input` is set.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        session: &GameSession,
        accepts_input: bool,
    ) -> Option<Position> {
        let side = ui.available_width().min(ui.available_height());
        let cell_size = side / BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Self::BACKGROUND);

        let grid_stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::WHITE);
        for i in 1..BOARD_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], grid_stroke);
            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], grid_stroke);
        }

        let board = session.board();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell_rect = Self::cell_rect(rect, cell_size, Position::new(row, col));
                match board.get(row, col) {
                    Some(Mark::X) => self.draw_x(painter, cell_rect),
                    Some(Mark::O) => self.draw_o(painter, cell_rect),
                    Some(Mark::Empty) | None => {}
                }
            }
        }

        self.last_hover = None;
        if accepts_input
            && let Some(hover) = response.hover_pos().and_then(|p| Self::cell_at(rect, p))
            && board.get(hover.row, hover.col) == Some(Mark::Empty)
        {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, hover),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 40),
            );
            self.last_hover = Some(hover);
        }

        if session.is_over() {
            self.draw_game_over(painter, rect, cell_size, session);
        }

        if accepts_input && response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, Self::X_COLOR);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.18;
        let radius = rect.width() / 2.0 - padding;
        painter.circle_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(Self::MARK_WIDTH, Self::O_COLOR),
        );
    }

    fn draw_game_over(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        cell_size: f32,
        session: &GameSession,
    ) {
        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(120));

        if let Some(line) = session.winning_line() {
            let center = |pos: Position| {
                egui::pos2(
                    rect.left() + (pos.col as f32 + 0.5) * cell_size,
                    rect.top() + (pos.row as f32 + 0.5) * cell_size,
                )
            };
            painter.line_segment(
                [center(line.start), center(line.end)],
                egui::Stroke::new(8.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        let banner = match session.status() {
            GameStatus::Won(player) => format!("{} Wins!", player),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => return,
        };
        painter.text(
            rect.center() - egui::vec2(0.0, 20.0),
            egui::Align2::CENTER_CENTER,
            banner,
            egui::FontId::proportional(48.0),
            egui::Color32::YELLOW,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 30.0),
            egui::Align2::CENTER_CENTER,
            "Click Restart or press R to play again",
            egui::FontId::proportional(16.0),
            egui::Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(600.0, 600.0))
    }

    #[test]
    fn test_cell_at_maps_corners_and_center() {
        let rect = board_rect();
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(10.0, 10.0)), Some(Position::new(0, 0)));
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(300.0, 300.0)), Some(Position::new(1, 1)));
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(590.0, 10.0)), Some(Position::new(0, 2)));
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(10.0, 590.0)), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let rect = board_rect();
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(-1.0, 10.0)), None);
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(300.0, 650.0)), None);
    }

    #[test]
    fn test_cell_at_offset_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(300.0, 300.0));
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(150.0, 80.0)), Some(Position::new(0, 0)));
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(390.0, 340.0)), Some(Position::new(2, 2)));
    }
}
