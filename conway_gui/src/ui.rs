// ui.rs - Controls, board drawing and input for the Game of Life window

use crate::GameOfLife;
use conway_core::{CellView, GridState, patterns};
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Vec2};
use std::time::{Duration, Instant};
use tracing::warn;

const HELP: &str = "LMB - Alive cell\nRMB - Dead cell\nEnter - Start simulation\n\
                    Escape - Restart simulation\nP - Pause simulation\nR - Random population";

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.step_if_due();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.session.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.session.toggle();
                    self.last_update = Instant::now();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.session.reset();
                    self.last_stats = None;
                }

                if ui.button("🎲 Random").clicked() {
                    self.session.pause();
                    self.reseed();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.session.pause();
                    let pattern = &patterns::PATTERNS[self.selected_pattern];
                    if let Err(err) = self.session.place_pattern(pattern) {
                        warn!(pattern = pattern.name, %err, "pattern rejected");
                    }
                    self.last_stats = None;
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.update_interval.as_secs_f32();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=100.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_secs_f32(1.0 / speed);
                }

                ui.separator();

                ui.label("Alive:");
                ui.color_edit_button_srgba(&mut self.alive_color);
                ui.label("Was alive:");
                ui.color_edit_button_srgba(&mut self.trace_color);
                ui.label("Never alive:");
                ui.color_edit_button_srgba(&mut self.empty_color);
            });

            ui.separator();

            self.draw_board(ui);

            ui.separator();

            let summary = PopulationSummary::of(self.session.grid());
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", summary.live));
                ui.label(format!("Dead cells: {}", summary.dead));
                ui.label(format!("Population: {:.1}%", summary.percent));
                if let Some(stats) = self.last_stats {
                    ui.label(format!("Births: {}  Deaths: {}", stats.births, stats.deaths));
                }
            });
        });

        // Keep ticking while running
        if self.session.is_running() {
            ctx.request_repaint_after(self.update_interval.saturating_sub(self.last_update.elapsed()));
        }
    }
}

/// Live/dead counts for the statistics row, read from the board as it is now.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PopulationSummary {
    live: usize,
    dead: usize,
    percent: f32,
}

impl PopulationSummary {
    fn of(grid: &GridState) -> Self {
        let total = grid.size() * grid.size();
        let live = grid.population();
        Self {
            live,
            dead: total - live,
            percent: (live as f32 / total as f32) * 100.0,
        }
    }
}

impl GameOfLife {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (enter, escape, pause, random) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::R),
            )
        });

        if enter {
            self.session.start();
            self.last_update = Instant::now();
        }
        if escape {
            self.session.reset();
            self.last_stats = None;
        }
        if pause {
            self.session.pause();
        }
        if random {
            self.reseed();
        }
    }

    fn reseed(&mut self) {
        match self.session.reseed() {
            Ok(_) => self.last_stats = None,
            Err(err) => warn!(%err, "random population ignored"),
        }
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let size = self.session.grid().size();
        let total_size = Vec2::splat(size as f32 * self.scale);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let rect = response.rect;

        let texture_id = self.upload_board(ui.ctx());
        painter.image(
            texture_id,
            rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        if !self.session.is_running() {
            painter.text(
                rect.min + Vec2::splat(4.0),
                Align2::LEFT_TOP,
                HELP,
                FontId::monospace(12.0),
                Color32::DARK_BLUE,
            );
        }

        // Paint while a button is held over the board
        let (pos, primary, secondary) = ui.input(|i| {
            (i.pointer.interact_pos(), i.pointer.primary_down(), i.pointer.secondary_down())
        });
        if !(primary || secondary) {
            return;
        }
        if let Some((x, y)) = pos.and_then(|pos| self.cell_at(rect, pos)) {
            match self.session.paint(x, y, primary) {
                Ok(()) => self.last_stats = None,
                Err(err) => warn!(x, y, %err, "cell edit ignored"),
            }
        }
    }

    /// Board cell under `pos`, if any.
    fn cell_at(&self, rect: Rect, pos: Pos2) -> Option<(usize, usize)> {
        if !rect.contains(pos) {
            return None;
        }
        let size = self.session.grid().size();
        let x = ((pos.x - rect.min.x) / self.scale) as usize;
        let y = ((pos.y - rect.min.y) / self.scale) as usize;
        (x < size && y < size).then_some((x, y))
    }

    fn board_image(&self) -> egui::ColorImage {
        let size = self.session.grid().size();
        let pixels = self
            .session
            .grid()
            .views()
            .map(|view| match view {
                CellView::Alive => self.alive_color,
                CellView::Trace => self.trace_color,
                CellView::Empty => self.empty_color,
            })
            .collect();
        egui::ColorImage { size: [size, size], pixels }
    }

    fn upload_board(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let image = self.board_image();
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("board", egui::ColorImage::new([1, 1], Color32::WHITE), egui::TextureOptions::NEAREST)
        });
        texture.set(image, egui::TextureOptions::NEAREST);
        texture.id()
    }
}
