use std::time::{Duration, Instant};

use eframe::egui;
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{GameMode, GameSession, GameStatus};

use crate::board_ui::BoardUi;
use crate::computer_timer::ComputerMoveTimer;
use crate::config::ConfigStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiAction {
    Restart,
    ToggleMode,
}

pub struct TicTacToeApp {
    session: GameSession,
    board_ui: BoardUi,
    computer_timer: ComputerMoveTimer,
    config_manager: ConfigStore,
}

impl TicTacToeApp {
    const BOTTOM_PANEL_HEIGHT: f32 = 100.0;

    pub fn new(session: GameSession, computer_delay: Duration, config_manager: ConfigStore) -> Self {
        Self {
            session,
            board_ui: BoardUi::new(),
            computer_timer: ComputerMoveTimer::new(computer_delay),
            config_manager,
        }
    }

    fn apply(&mut self, action: UiAction) {
        self.computer_timer.disarm();
        match action {
            UiAction::Restart => self.session.restart(),
            UiAction::ToggleMode => {
                let mode = self.session.toggle_mode();
                if let Err(e) = self.config_manager.update_config(|config| config.mode = mode) {
                    log!("Failed to save mode: {}", e);
                }
            }
        }
    }

    fn drive_computer(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.computer_timer.poll(self.session.is_computer_turn(), now) {
            match self.session.computer_move() {
                Ok(Some(_)) => {}
                Ok(None) => log!("Computer found no move to play"),
                Err(e) => log!("Computer move rejected: {}", e),
            }
        }
        if let Some(remaining) = self.computer_timer.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn status_text(&self) -> String {
        match self.session.status() {
            GameStatus::InProgress => format!("Turn: {}", self.session.current_player()),
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    fn mode_button_text(&self) -> &'static str {
        match self.session.mode() {
            GameMode::HumanVsHuman => "Human vs Human (M)",
            GameMode::HumanVsComputer => "Human vs AI (M)",
        }
    }

    fn render_bottom_panel(&self, ui: &mut egui::Ui) -> Option<UiAction> {
        let mut action = None;
        let scores = self.session.scores();

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.status_text()).size(16.0));
            ui.add_space(40.0);
            ui.label(egui::RichText::new(format!("X: {}    O: {}", scores.x, scores.o)).size(16.0));
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let button_size = egui::vec2(200.0, 40.0);
            if ui.add_sized(button_size, egui::Button::new("Restart (R)")).clicked() {
                action = Some(UiAction::Restart);
            }
            ui.add_space(40.0);
            if ui.add_sized(button_size, egui::Button::new(self.mode_button_text())).clicked() {
                action = Some(UiAction::ToggleMode);
            }
        });

        action
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let key_action = ctx.input(|i| {
            if i.key_pressed(egui::Key::R) {
                Some(UiAction::Restart)
            } else if i.key_pressed(egui::Key::M) {
                Some(UiAction::ToggleMode)
            } else {
                None
            }
        });
        if let Some(action) = key_action {
            self.apply(action);
        }

        self.drive_computer(ctx);

        let panel_action = egui::TopBottomPanel::bottom("controls")
            .exact_height(Self::BOTTOM_PANEL_HEIGHT)
            .show(ctx, |ui| self.render_bottom_panel(ui))
            .inner;
        if let Some(action) = panel_action {
            self.apply(action);
        }

        let accepts_input = !self.session.is_over() && !self.session.is_computer_turn();
        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| self.board_ui.render(ui, &self.session, accepts_input))
            .inner;

        if let Some(pos) = clicked {
            match self.session.play_move(pos.row, pos.col) {
                // Next frame arms the computer timer.
                Ok(()) if self.session.is_computer_turn() => ctx.request_repaint(),
                Ok(()) => {}
                Err(e) => log!("Move at {} rejected: {}", pos, e),
            }
        }
    }
}
