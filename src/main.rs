mod app;
mod color;
mod data;
mod export;
mod state;
mod ui;

use app::StreamExplorerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Java Stream Explorer",
        options,
        Box::new(|cc| Ok(Box::new(StreamExplorerApp::new(cc)))),
    )
}
