// src/main.rs
use anyhow::Result;
use eframe::egui;

use mythos_canvas::MythosApp;

fn main() -> Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("Mythos Canvas"),
        ..Default::default()
    };

    eframe::run_native(
        "Mythos Canvas",
        options,
        Box::new(|_cc| Box::new(MythosApp::new())),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
