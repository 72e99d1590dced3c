mod app;
mod state;
mod ui;

use app::SmartTempApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Temp Tool",
        options,
        Box::new(|_cc| Ok(Box::new(SmartTempApp::default()))),
    )
}
