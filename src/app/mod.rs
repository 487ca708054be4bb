//! `AmidaApp`, the top-level egui application state.
//!
//! This module declares the `AmidaApp` struct and the actions the panels
//! trigger. Drawing is split across the sibling sub-modules:
//!
//! - `toolbar`: roster / rung inputs, regenerate, mode switch
//! - `content`: board rendering (2-D flat, 3-D cylinder) and results

pub mod content;
pub mod toolbar;

use eframe::egui;

use amidakuji::board::parse_names;
use amidakuji::render::animator::{Playback, PlaybackFrame};
use amidakuji::render::RenderMode;
use amidakuji::{AmidaConfig, AmidaEngine};

// ─── Application state ───────────────────────────────────────────────────────

pub struct AmidaApp {
    pub engine: AmidaEngine,
    /// Roster as typed, one name per line
    pub names_input: String,
    pub rung_count: usize,
    pub render_mode: RenderMode,
    pub error: Option<String>,
    pub dark_mode: bool,
    pub show_results: bool,
    /// Running (or finished) animation for the current paths
    pub playback: Option<Playback>,
    /// Walker positions drawn this frame
    pub walkers: Option<PlaybackFrame>,
    #[cfg(feature = "spatial")]
    pub cam_params: amidakuji::render::spatial::CameraParams,
}

impl AmidaApp {
    pub fn new(config: AmidaConfig) -> Self {
        let names_input = config.names_text();
        let rung_count = config.rung_count;
        let engine = AmidaEngine::new(config);
        #[cfg(feature = "spatial")]
        let cam_params = amidakuji::render::spatial::CameraParams::framing(
            &amidakuji::render::spatial::Cylinder::for_board(
                engine.board(),
                engine.config().column_height,
            ),
        );
        Self {
            engine,
            names_input,
            rung_count,
            render_mode: RenderMode::Flat,
            error: None,
            dark_mode: false,
            show_results: false,
            playback: None,
            walkers: None,
            #[cfg(feature = "spatial")]
            cam_params,
        }
    }

    /// Rebuild the board from the current inputs.
    pub fn regenerate(&mut self) {
        let names = parse_names(&self.names_input);
        match self.engine.regenerate(&names, self.rung_count) {
            Ok(_) => {
                self.error = None;
                self.show_results = false;
                self.reset_playback();
                #[cfg(feature = "spatial")]
                {
                    self.cam_params = amidakuji::render::spatial::CameraParams::framing(
                        &amidakuji::render::spatial::Cylinder::for_board(
                            self.engine.board(),
                            self.engine.config().column_height,
                        ),
                    );
                }
            }
            Err(e) => {
                self.error = Some(format!("名前は2人以上入力してください ({})", e));
            }
        }
    }

    /// Send every walker down at once.
    pub fn start_all(&mut self) {
        self.engine.start_all();
        self.playback = Some(Playback::new(
            self.engine.epoch(),
            self.engine.config().flat_speed,
        ));
        self.walkers = None;
    }

    /// Send a single walker down from `index`.
    pub fn start_one(&mut self, index: usize) {
        let speed = match self.render_mode {
            RenderMode::Flat => self.engine.config().flat_speed,
            RenderMode::Spatial3D => self.engine.config().spatial_speed,
        };
        match self.engine.start(index) {
            Ok(_) => {
                self.playback = Some(Playback::new(self.engine.epoch(), speed));
                self.walkers = None;
            }
            Err(e) if e.is_contract_violation() => {
                log::error!("Ignoring start request: {}", e);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn reset_playback(&mut self) {
        self.playback = None;
        self.walkers = None;
    }

    /// Advance the animation by one frame and schedule the next one.
    ///
    /// A playback whose epoch no longer matches the engine is dropped
    /// without scheduling another repaint.
    pub fn tick(&mut self, ctx: &egui::Context) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        if playback.is_stale(self.engine.epoch()) {
            log::debug!("Dropping stale playback (epoch {})", playback.epoch());
            self.reset_playback();
            return;
        }
        if playback.is_finished() {
            return;
        }
        let frame = playback.step(self.engine.paths());
        if frame.finished {
            self.show_results = self.engine.paths().len() > 1;
        } else {
            ctx.request_repaint();
        }
        self.walkers = Some(frame);
    }

    /// Cursor used for drawing trails; past the end once finished.
    pub fn trail_cursor(&self) -> f64 {
        match self.playback {
            Some(ref p) if p.is_finished() => f64::MAX,
            Some(ref p) => p.cursor(),
            None => 0.0,
        }
    }
}

impl Default for AmidaApp {
    fn default() -> Self {
        Self::new(AmidaConfig::default())
    }
}

impl eframe::App for AmidaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.tick(ctx);

        egui::SidePanel::left("controls")
            .default_width(220.0)
            .show(ctx, |ui| {
                self.draw_toolbar(ui);
            });

        if self.show_results {
            egui::SidePanel::right("results")
                .default_width(200.0)
                .show(ctx, |ui| {
                    self.draw_results_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });
    }
}
