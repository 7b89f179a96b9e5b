#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod sankey_view;

use app::CommuteFlowApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("Commuteflow"),
        ..Default::default()
    };

    eframe::run_native(
        "Commuteflow",
        options,
        Box::new(|cc| Ok(Box::new(CommuteFlowApp::new(cc)))),
    )
}
