// src/app.rs
use eframe::egui;

use crate::analysis::AnalysisClient;
use crate::state::{AppState, Phase};
use crate::ui;

pub struct MythosApp {
    state: AppState,
    client: AnalysisClient,
}

impl MythosApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            client: AnalysisClient::new(),
        }
    }
}

impl eframe::App for MythosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A click last frame set the phase to Requesting and that frame was
        // presented with the busy indicator; perform the blocking call now,
        // before drawing this frame's result.
        if self.state.phase == Phase::Requesting {
            self.state.run_analysis(&self.client);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("🔮 Mythos Canvas");
                ui.label("Descubre los secretos mitológicos y científicos de tus dibujos");
            });
        });

        egui::SidePanel::left("settings_panel")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui::sidebar::show_sidebar(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::drawing_panel::show_drawing_panel(ui, &mut self.state);
        });

        if self.state.phase == Phase::Requesting {
            ctx.request_repaint();
        }
    }
}
