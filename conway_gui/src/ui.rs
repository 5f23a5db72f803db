// ui.rs - egui rendering and input wiring for LifeApp
// Buttons, slider and clicks call into SimulationController; nothing here owns cell state

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Instant;

use conway::controller::{MAX_RATE, MIN_RATE};
use conway::patterns;
use conway::snapshot::SNAPSHOT_EXTENSION;
use conway::{GRID_SIZE, RuleMode};

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sim.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.add_enabled(!self.sim.is_playing(), egui::Button::new("Step")).clicked() {
                    self.sim.step();
                }

                let button_text = if self.sim.is_playing() { "Stop" } else { "Play" };
                if ui.button(button_text).clicked() {
                    self.sim.toggle_playback();
                }

                ui.label("Rate:");
                let mut rate = self.sim.playback_rate();
                if ui.add(egui::Slider::new(&mut rate, MIN_RATE..=MAX_RATE)).changed() {
                    self.sim.set_playback_rate(rate);
                }

                if ui.button("Clear").clicked() {
                    self.sim.clear();
                }

                if ui.button("Save Game").clicked() {
                    self.save_game();
                }

                if ui.button("Load Game").clicked() {
                    self.load_game();
                }

                ui.vertical(|ui| {
                    let mut mode = self.sim.rule_mode();
                    for option in RuleMode::ALL {
                        ui.radio_value(&mut mode, option, option.name());
                    }
                    self.sim.set_rule_mode(mode);
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.sim.apply_pattern(&patterns::PATTERNS[self.selected_pattern]);
                }

                if ui.button("Random").clicked() {
                    self.random_seed = self.random_seed.wrapping_add(1);
                    self.sim.randomize(self.random_seed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            // Draw the grid
            let box_size = self.cell_size;
            let spacing = 1.0;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * GRID_SIZE as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Grid lines show through the spacing
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::WHITE,
            );

            let mut clicked = None;
            for (row, col, alive) in self.sim.grid().iter_cells() {
                let x = start_pos.x + col as f32 * (box_size + spacing);
                let y = start_pos.y + row as f32 * (box_size + spacing);

                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let cell_color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 0.0, cell_color);
                painter.rect_stroke(rect, 0.0, Stroke::new(0.25, Color32::from_gray(60)));

                // Editing only while stopped
                if !self.sim.is_playing() && response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if rect.contains(pos) {
                            clicked = Some((row, col));
                        }
                    }
                }
            }
            if let Some((row, col)) = clicked {
                self.sim.toggle_cell(row, col);
            }

            ui.separator();

            let live_cells = self.sim.grid().population();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.sim.generation()));
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Rule: {}", self.sim.rule_mode()));
            });

            if let Some(status) = &self.status {
                ui.label(status.as_str());
            }
        });

        // Keep ticking while playing
        if self.sim.is_playing() {
            ctx.request_repaint_after(self.sim.tick_period());
        }
    }
}

impl LifeApp {
    fn file_dialog() -> rfd::FileDialog {
        rfd::FileDialog::new()
            .set_directory(".")
            .set_title("Enter file name")
            .add_filter("Game of Life Files (*.lif)", &[SNAPSHOT_EXTENSION])
    }

    fn save_game(&mut self) {
        self.sim.stop();
        let Some(path) = Self::file_dialog().save_file() else { return };
        self.status = Some(match self.sim.save(&path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => format!("Save failed: {}", e),
        });
    }

    fn load_game(&mut self) {
        self.sim.stop();
        let Some(path) = Self::file_dialog().pick_file() else { return };
        self.status = Some(match self.sim.load(&path) {
            Ok(()) => format!("Loaded {}", path.display()),
            Err(e) => format!("Load failed: {}", e),
        });
    }
}
