//! Main application for the Kamisado GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameConfig, GameMode, GameState};
use super::theme::*;
use crate::board::{color_name, Side};
use crate::Pos;

/// Main Kamisado application
pub struct KamisadoApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl KamisadoApp {
    /// Create a new app with the given mode and settings
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: GameConfig) -> Self {
        Self {
            state: GameState::new(mode, config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_match(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, self.state.config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Match (play first)").clicked() {
                        self.new_match(GameMode::PvE { human_side: Side::First });
                        ui.close_menu();
                    }
                    if ui.button("New Match (play second)").clicked() {
                        self.new_match(GameMode::PvE { human_side: Side::Second });
                        ui.close_menu();
                    }
                    if ui.button("New Match (hotseat)").clicked() {
                        self.new_match(GameMode::PvP);
                        ui.close_menu();
                    }
                    if ui.button("New Match (AI vs AI)").clicked() {
                        self.new_match(GameMode::EvE);
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
                        GameMode::PvE { human_side } => format!("PvE - You: {human_side:?}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                        GameMode::EvE => "AI vs AI".to_string(),
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
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_points_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                if self.state.is_match_over() {
                    self.render_match_over_card(ui);
                    ui.add_space(10.0);
                } else if self.state.awaits_fill() {
                    self.render_fill_card(ui);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
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
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("KAMISADO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("sumo edition").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Side to move and the color it is forced to play
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let board = &self.state.board;
        let side = board.current_player();
        let (body, _) = stone_colors(side);

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, body);
                if let Some(color) = board.current_color() {
                    ui.painter().circle_filled(rect.center(), 11.0, cell_color(color));
                }

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{side:?}")).size(18.0).strong().color(TEXT_PRIMARY));

                    let forced = match board.current_color() {
                        Some(color) => format!("must move {}", color_name(color)),
                        None => "chooses the opening stone".to_string(),
                    };
                    ui.label(RichText::new(forced).size(11.0).color(TEXT_SECONDARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if board.is_round_over() {
                        ("Round over", FORCED_STONE_MARKER)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("AI to move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Match points of both sides
    fn render_points_card(&self, ui: &mut egui::Ui) {
        let board = &self.state.board;
        let target = board.winning_points();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new(format!("POINTS (first to {target})")).size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for side in [Side::First, Side::Second] {
                let points = board.points(side);
                let (body, _) = stone_colors(side);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(18.0).color(body));
                    ui.label(RichText::new(format!("{side:?}")).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = RichText::new(format!("{points}/{target}")).size(14.0);
                        let text = if points >= target {
                            text.strong().color(FORCED_STONE_MARKER)
                        } else {
                            text.color(TEXT_PRIMARY)
                        };
                        ui.label(text);
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.state.ai_thinking_elapsed() {
                Some(elapsed) => {
                    ui.label(
                        RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                            .size(28.0)
                            .strong()
                            .color(TIMER_WARNING),
                    );
                }
                None => {
                    let elapsed = self.state.move_timer.elapsed();
                    ui.label(
                        RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                            .size(24.0)
                            .color(TEXT_PRIMARY),
                    );
                }
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Round finished: pick the edge to refill the home rows from
    fn render_fill_card(&mut self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 60, 80))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("FILL FROM").size(12.0).color(TEXT_PRIMARY));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Left (L)").clicked() {
                            self.state.fill(false);
                        }
                        if ui.button("Right (R)").clicked() {
                            self.state.fill(true);
                        }
                    });
                });
            });
    }

    fn render_match_over_card(&mut self, ui: &mut egui::Ui) {
        let Some(winner) = self.state.board.winner() else {
            return;
        };
        let (body, _) = stone_colors(winner);
        let mode = self.state.mode;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("MATCH OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("●").size(32.0).color(body));
                        ui.add_space(8.0);
                        ui.label(RichText::new(format!("{winner:?} wins!")).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                    ui.add_space(12.0);
                    if ui.button("New Match").clicked() {
                        self.new_match(mode);
                    }
                });
            });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
                if ui.button("New Match (N)").clicked() {
                    self.new_match(self.state.mode);
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.turn_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                match &self.state.last_ai_result {
                    Some(result) => {
                        if let Some(color) = result.color {
                            ui.label(
                                RichText::new(format!("Opened with {}", color_name(color)))
                                    .size(11.0)
                                    .color(TIMER_NORMAL),
                            );
                        }
                        if let Some(pos) = result.best_move {
                            ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(TIMER_NORMAL));
                        }
                        ui.label(RichText::new(&result.summary).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_MUTED));
                    }
                    None => {
                        ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    }
                }
            });
    }

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
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let state = &self.state;
            let legal_moves = if state.is_human_turn() {
                state.board.get_legal_moves()
            } else {
                Vec::new()
            };
            let clickable = |pos: Pos| state.can_click(pos);
            let overlay = BoardOverlay {
                legal_moves: &legal_moves,
                clickable: &clickable,
                last_move: state.last_move(),
                interactive: !state.board.is_round_over(),
            };

            let clicked = self.board_view.show(ui, &state.board, &overlay);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.handle_click(pos) {
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
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.new_match(self.state.mode);
            }
            if self.state.awaits_fill() {
                if i.key_pressed(egui::Key::L) {
                    self.state.fill(false);
                } else if i.key_pressed(egui::Key::R) {
                    self.state.fill(true);
                }
            }
        });
    }
}

impl eframe::App for KamisadoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling the engine thread and the running timer
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
