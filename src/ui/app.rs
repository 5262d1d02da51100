//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::{DecisionKind, Disc};

/// Main Connect Four application
pub struct ConnectFourApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for ConnectFourApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

fn color_name(disc: Disc) -> &'static str {
    match disc {
        Disc::Red => "RED",
        Disc::Yellow => "YELLOW",
        Disc::Empty => "-",
    }
}

fn disc_color(disc: Disc) -> egui::Color32 {
    match disc {
        Disc::Red => RED_DISC,
        Disc::Yellow => YELLOW_DISC,
        Disc::Empty => HOLE,
    }
}

impl ConnectFourApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Red)").clicked() {
                        self.state = GameState::new(GameMode::PvE { human_color: Disc::Red });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Yellow)").clicked() {
                        self.state = GameState::new(GameMode::PvE { human_color: Disc::Yellow });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state = GameState::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => {
                            format!("PvE - You: {}", color_name(human_color))
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("CONNECT FOUR").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, disc_color(turn));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(color_name(turn)).size(18.0).strong().color(TEXT_PRIMARY));
                    let status = if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI to move", STATUS_WARNING)
                    } else {
                        ("Your turn", STATUS_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            let elapsed = self.state.move_elapsed();
            ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(16.0).color(TEXT_SECONDARY));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("Hint").clicked() {
                    self.state.request_suggestion();
                }
                if ui.button("New").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the last heuristic decision
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HEURISTIC").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(decision) = &self.state.last_decision else {
                ui.label(RichText::new("No decision yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let kind = match decision.kind {
                DecisionKind::Opening => "Opening",
                DecisionKind::Streak => "Streak",
                DecisionKind::Fallback => "Fallback",
            };
            ui.label(RichText::new(kind).size(11.0).strong().color(STATUS_NORMAL));
            ui.label(
                RichText::new(format!("Column {}", decision.column + 1))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );

            if let Some(best) = &decision.best {
                let owner = best.streak.disc.map_or("-", color_name);
                ui.label(
                    RichText::new(format!(
                        "{:?} run of {} ({}) from {:?}",
                        best.streak.axis,
                        best.streak.size(),
                        owner,
                        best.streak.start
                    ))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("Threshold: {:.2}", best.threshold))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
            ui.label(
                RichText::new(format!("{} candidates", decision.candidates))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            if let Some(time) = self.state.ai_time {
                ui.label(
                    RichText::new(format!("Last AI: {}us", time.as_micros()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    let text = match result.winner {
                        Some(winner) => format!("{} WINS!", color_name(winner)),
                        None => "DRAW".to_string(),
                    };
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));

                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self
                .state
                .game_over
                .as_ref()
                .and_then(|r| r.winning_line.as_deref());

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                self.state.suggested_column,
                winning_line,
                self.state.game_over.is_some(),
            );

            if let Some(column) = clicked {
                if let Err(msg) = self.state.try_drop(column) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The heuristic answers instantly; no worker thread needed
        if self.state.is_ai_turn() && self.state.game_over.is_none() {
            self.state.play_ai_turn();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the move timer ticking
        if self.state.game_over.is_none() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
