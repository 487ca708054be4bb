use eframe::egui;

mod app;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "あみだくじ",
        options,
        Box::new(|cc| {
            ui::install_japanese_font(&cc.egui_ctx);
            Ok(Box::new(app::AmidaApp::default()))
        }),
    )
}
