//! Control panel for `AmidaApp`.
//!
//! Draws the roster text box, rung count, 3D column height, the regenerate
//! button, and the 2D / 3D switch.

use eframe::egui;
use amidakuji::config::{MAX_COLUMN_HEIGHT, MAX_RUNG_COUNT, MIN_COLUMN_HEIGHT};
use amidakuji::render::RenderMode;

use super::AmidaApp;

impl AmidaApp {
    /// Render the left control panel.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.render_mode.title());
        ui.separator();

        ui.label(egui::RichText::new("参加者 (改行で区切る):").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.names_input)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("横線の数:");
            ui.add(egui::DragValue::new(&mut self.rung_count).range(0..=MAX_RUNG_COUNT));
        });

        if self.render_mode == RenderMode::Spatial3D {
            let mut height = self.engine.config().column_height;
            ui.horizontal(|ui| {
                ui.label("縦の長さ:");
                ui.add(
                    egui::DragValue::new(&mut height).range(MIN_COLUMN_HEIGHT..=MAX_COLUMN_HEIGHT),
                );
            });
            if height != self.engine.config().column_height {
                self.engine.set_column_height(height);
            }
        }

        ui.add_space(8.0);
        if ui.button("あみだくじを作り直す").clicked() {
            self.regenerate();
        }

        if let Some(ref error) = self.error {
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.add_space(16.0);
        ui.separator();

        // Render mode switch
        let label = match self.render_mode {
            RenderMode::Flat => "3Dモードへ切り替え",
            RenderMode::Spatial3D => "2Dモードへ戻る",
        };
        let can_switch = cfg!(feature = "spatial") || self.render_mode == RenderMode::Spatial3D;
        if ui.add_enabled(can_switch, egui::Button::new(label)).clicked() {
            self.render_mode = self.render_mode.toggled();
            // Walkers from the other view do not carry over
            self.engine.clear_paths();
            self.reset_playback();
            self.show_results = false;
        }

        ui.add_space(8.0);
        let dark_label = if self.dark_mode { "\u{263E} Dark" } else { "\u{2600} Light" };
        if ui.button(dark_label).clicked() {
            self.dark_mode = !self.dark_mode;
        }

        ui.add_space(16.0);
        let board = self.engine.board();
        ui.small(format!(
            "{} lines · {} rungs",
            board.line_count(),
            board.horizontal_lines.len()
        ));
    }
}
