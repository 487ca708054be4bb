//! Board rendering for `AmidaApp`.
//!
//! - `draw_content`: dispatcher (flat / cylinder)
//! - `draw_flat`: 2-D ladder with names, goals and "start all"
//! - `draw_spatial`: 3-D cylinder with orbit camera (`spatial` feature)
//! - `draw_results_panel`: who landed on which goal

use eframe::egui;
use egui::{Align2, Color32, FontId, Sense, Stroke};

use amidakuji::render::animator::trail;
use amidakuji::render::flat::FlatLayout;
#[cfg(feature = "spatial")]
use amidakuji::render::RenderMode;

use crate::ui::{color32, faded, pos2, truncate_str};
use super::AmidaApp;

const HEADER_H: f32 = 32.0;
const FOOTER_H: f32 = 28.0;
const SIDE_PAD: f32 = 12.0;
const RUNG_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

impl AmidaApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        if self.engine.board().is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("参加者を入力してください");
            });
            return;
        }

        #[cfg(feature = "spatial")]
        {
            if self.render_mode == RenderMode::Spatial3D {
                self.draw_spatial(ui);
                return;
            }
        }

        self.draw_flat(ui);
    }

    // ── 2-D ladder ───────────────────────────────────────────────────────────

    pub fn draw_flat(&mut self, ui: &mut egui::Ui) {
        let button_h = 44.0;
        let size = egui::vec2(
            ui.available_width().min(520.0),
            (ui.available_height() - button_h).max(120.0),
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;
        let dark = ui.visuals().dark_mode;
        let board_bg = if dark { Color32::from_gray(30) } else { Color32::from_gray(250) };
        let text_color = if dark { Color32::from_gray(220) } else { RUNG_COLOR };
        painter.rect_filled(rect, 6.0, board_bg);

        let layout = FlatLayout::new(
            [rect.left() + SIDE_PAD, rect.top() + HEADER_H],
            [
                rect.width() - SIDE_PAD * 2.0,
                rect.height() - HEADER_H - FOOTER_H,
            ],
        );
        let board = self.engine.board();

        // Names (click one to send that walker alone)
        for line in &board.vertical_lines {
            let top = layout.to_screen(amidakuji::Point::new(line.x, 0.0));
            painter.text(
                egui::pos2(top[0], rect.top() + HEADER_H * 0.5),
                Align2::CENTER_CENTER,
                truncate_str(&line.name, 8),
                FontId::proportional(14.0),
                color32(line.color),
            );
        }

        // Vertical lines
        for line in &board.vertical_lines {
            let a = layout.to_screen(amidakuji::Point::new(line.x, 0.0));
            let b = layout.to_screen(amidakuji::Point::new(line.x, 1.0));
            painter.line_segment([pos2(a), pos2(b)], Stroke::new(2.0, faded(line.color, 0.5)));
        }

        // Rungs with joints at both ends
        for rung in &board.horizontal_lines {
            let (Some(l1), Some(l2)) = (board.line(rung.index1), board.line(rung.index2)) else {
                continue;
            };
            let a = pos2(layout.to_screen(amidakuji::Point::new(l1.x, rung.y)));
            let b = pos2(layout.to_screen(amidakuji::Point::new(l2.x, rung.y)));
            painter.line_segment([a, b], Stroke::new(1.5, text_color));
            painter.circle_filled(a, 2.5, text_color);
            painter.circle_filled(b, 2.5, text_color);
        }

        // Goals
        for (line, goal) in board.vertical_lines.iter().zip(&board.goals) {
            let bottom = layout.to_screen(amidakuji::Point::new(line.x, 1.0));
            painter.text(
                egui::pos2(bottom[0], rect.bottom() - FOOTER_H * 0.5),
                Align2::CENTER_CENTER,
                goal.label(),
                FontId::proportional(12.0),
                text_color,
            );
        }

        // Trails + walkers
        let cursor = self.trail_cursor();
        for path in self.engine.paths() {
            let pts: Vec<egui::Pos2> = trail(&path.points, cursor)
                .into_iter()
                .map(|p| pos2(layout.to_screen(p)))
                .collect();
            painter.add(egui::Shape::line(pts, Stroke::new(3.0, faded(path.color, 0.6))));
        }
        if let Some(ref frame) = self.walkers {
            for w in &frame.walkers {
                painter.circle_filled(pos2(layout.to_screen(w.pos)), 7.0, color32(w.color));
            }
        }

        // Click on a name starts that walker
        let mut clicked_line = None;
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if pos.y < rect.top() + HEADER_H {
                    clicked_line = layout.nearest_line(board, pos.x);
                }
            }
        }
        if let Some(index) = clicked_line {
            self.start_one(index);
        }

        ui.add_space(8.0);
        let start = egui::Button::new(
            egui::RichText::new("一斉にスタート")
                .strong()
                .size(16.0)
                .color(Color32::WHITE),
        )
        .fill(Color32::from_rgb(0xff, 0x57, 0x22));
        if ui.add(start).clicked() {
            self.start_all();
        }
    }

    // ── 3-D cylinder ─────────────────────────────────────────────────────────

    #[cfg(feature = "spatial")]
    pub fn draw_spatial(&mut self, ui: &mut egui::Ui) {
        use amidakuji::render::spatial::{ndc_to_screen, project, Cylinder};

        let controls_h = 72.0;
        let size = egui::vec2(
            ui.available_width(),
            (ui.available_height() - controls_h).max(160.0),
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 6.0, Color32::from_gray(0x22));

        // Drag to orbit, scroll to zoom
        if response.dragged() {
            let delta = response.drag_delta();
            self.cam_params.orbit(-delta.x * 0.01, delta.y * 0.01);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.cam_params.zoom(1.0 - scroll * 0.002);
            }
        }

        let board = self.engine.board();
        let cylinder = Cylinder::for_board(board, self.engine.config().column_height);
        let cam = self.cam_params;
        let aspect = rect.width() / rect.height().max(1.0);
        let center = [rect.center().x, rect.center().y];
        let half = [rect.width() * 0.5, rect.height() * 0.5];
        let to_screen = |world: [f32; 3]| {
            project(&cam, world, aspect).map(|p| (pos2(ndc_to_screen(p.ndc, center, half)), p.depth))
        };
        // Farther geometry fades out
        let depth_alpha = |depth: f32| (1.6 - depth / cam.distance).clamp(0.25, 1.0);

        let polyline = |world: &[[f32; 3]], width: f32, color: amidakuji::render::color::Rgba| {
            for pair in world.windows(2) {
                if let (Some((a, da)), Some((b, db))) = (to_screen(pair[0]), to_screen(pair[1])) {
                    let alpha = depth_alpha((da + db) * 0.5);
                    painter.line_segment([a, b], Stroke::new(width, faded(color, alpha)));
                }
            }
        };

        // Columns
        for line in &board.vertical_lines {
            let top = cylinder.world(amidakuji::Point::new(line.x, 0.0));
            let bottom = cylinder.world(amidakuji::Point::new(line.x, 1.0));
            polyline(&[top, bottom], 3.0, amidakuji::render::color::PALETTE[3]);
            if let Some((p, depth)) = to_screen(top) {
                painter.text(
                    p - egui::vec2(0.0, 10.0),
                    Align2::CENTER_BOTTOM,
                    truncate_str(&line.name, 8),
                    FontId::proportional(13.0),
                    faded(line.color, depth_alpha(depth)),
                );
            }
            if let (Some((p, depth)), Some(goal)) = (to_screen(bottom), board.goal(line.line_index)) {
                painter.text(
                    p + egui::vec2(0.0, 8.0),
                    Align2::CENTER_TOP,
                    goal.label(),
                    FontId::proportional(12.0),
                    faded(amidakuji::render::color::Rgba::WHITE, depth_alpha(depth)),
                );
            }
        }

        // Rungs as arcs on the wall
        for rung in &board.horizontal_lines {
            let arc = cylinder.rung_arc(board, rung, 12);
            polyline(&arc, 1.5, amidakuji::render::color::Rgba::WHITE);
        }

        // Trail + walker ball
        let cursor = self.trail_cursor();
        for path in self.engine.paths() {
            let world = cylinder.trail(&path.points, cursor, 12);
            polyline(&world, 3.5, path.color);
        }
        if let Some(ref frame) = self.walkers {
            for w in &frame.walkers {
                if let Some((p, depth)) = to_screen(cylinder.world(w.pos)) {
                    let radius = (0.3 * rect.height() / depth).clamp(3.0, 24.0);
                    painter.circle_filled(p, radius, color32(w.color));
                    painter.circle_stroke(p, radius, Stroke::new(1.0, Color32::WHITE));
                }
            }
        }

        // One start button per line, plus reset
        let mut start = None;
        let mut reset = false;
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for line in &board.vertical_lines {
                let button = egui::Button::new(
                    egui::RichText::new(format!("{}", line.line_index + 1)).color(Color32::WHITE),
                )
                .fill(color32(amidakuji::render::color::PALETTE[3]));
                if ui.add(button).on_hover_text(&line.name).clicked() {
                    start = Some(line.line_index);
                }
            }
        });
        ui.add_space(4.0);
        if ui.button("リセット").clicked() {
            reset = true;
        }

        if let Some(index) = start {
            self.start_one(index);
        }
        if reset {
            self.regenerate();
        }
    }

    // ── Results ──────────────────────────────────────────────────────────────

    pub fn draw_results_panel(&self, ui: &mut egui::Ui) {
        ui.heading("結果");
        ui.separator();

        let board = self.engine.board();
        egui::Grid::new("results").striped(true).show(ui, |ui| {
            for outcome in self.engine.outcomes() {
                let color = board
                    .line(outcome.start)
                    .map(|l| color32(l.color))
                    .unwrap_or(Color32::GRAY);
                ui.colored_label(color, truncate_str(&outcome.name, 12));
                ui.label("→");
                ui.label(outcome.goal.map(|g| g.label()).unwrap_or("-"));
                ui.end_row();
            }
        });
    }
}
