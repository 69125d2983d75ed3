//! Main application for the Hex GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::{GameConfig, Stone};

/// Main Hex application
pub struct HexApp {
    state: GameState,
    board_view: BoardView,
    config: GameConfig,
}

impl Default for HexApp {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl HexApp {
    /// Create a new app from the loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::from_config(&config),
            board_view: BoardView::default(),
            config,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(self.config.board_size, mode, self.config.seed);
    }

    fn stone_color(stone: Stone) -> egui::Color32 {
        match stone {
            Stone::Blue => BLUE_STONE,
            Stone::Red => RED_STONE,
            Stone::Empty => TEXT_MUTED,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer - Blue)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Stone::Blue });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Computer - Red)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Stone::Red });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => {
                            format!("vs Computer - You: {}", human_color.name())
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_goals_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(winner) = self.state.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
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

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("HEX").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.state.game.size();
            ui.label(RichText::new(format!("{}x{} board", size, size)).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, Self::stone_color(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(2.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.winner().is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Computer to move", STATUS_WARNING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Which edges each color has to join
    fn render_goals_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GOALS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new("Blue: West to East").size(12.0).color(BLUE_STONE_HIGHLIGHT));
            ui.label(RichText::new("Red: North to South").size(12.0).color(RED_STONE_HIGHLIGHT));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(RichText::new("Undo (U)").size(12.0)).clicked() {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if ui.button(RichText::new("New Game (N)").size(12.0)).clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui, winner: Stone) {
        let path_len = self.state.winning_path.as_ref().map_or(0, Vec::len);

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} WINS!", winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(Self::stone_color(winner)),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("chain of {} cells", path_len)).size(11.0).color(TEXT_SECONDARY));
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
            let accept_input = self.state.winner().is_none() && self.state.is_human_turn();

            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                self.state.current_turn(),
                self.state.game.last_move(),
                self.state.winning_path.as_deref(),
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for HexApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
