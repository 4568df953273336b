// src/ui/drawing_panel.rs
use eframe::egui::{self, Color32};

use crate::canvas;
use crate::state::{AppState, Notice, Phase};

pub fn show_drawing_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Panel de Dibujo");
    ui.add_space(8.0);

    canvas::show_canvas(
        ui,
        &mut state.canvas,
        state.stroke_width as f32,
        state.stroke_color,
    );

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let requesting = state.phase == Phase::Requesting;
        let analyze = ui.add_enabled(
            !requesting,
            egui::Button::new("🔍 Analizar Dibujo Mitológico"),
        );
        if analyze.clicked() {
            state.request_analysis();
        }

        if ui.add_enabled(!requesting, egui::Button::new("Limpiar lienzo")).clicked() {
            state.canvas.clear();
        }

        // Re-read the phase after the click is handled: the activation frame
        // must present the busy indicator, since the next frame performs the
        // blocking call before anything is drawn.
        if state.phase == Phase::Requesting {
            ui.spinner();
            ui.label("🔮 Consultando los secretos del universo…");
        }
    });

    show_notices(ui, &state.notices);

    if state.analysis_done && !state.analysis_text.is_empty() {
        ui.add_space(8.0);
        ui.separator();
        ui.heading("📜 Análisis Mitológico y Científico");
        ui.add_space(4.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(&state.analysis_text);
        });
    }
}

fn show_notices(ui: &mut egui::Ui, notices: &[Notice]) {
    for notice in notices {
        let (color, text) = match notice {
            Notice::Info(msg) => (Color32::from_rgb(110, 160, 255), msg),
            Notice::Warning(msg) => (Color32::from_rgb(230, 180, 60), msg),
            Notice::Error(msg) => (Color32::from_rgb(230, 80, 80), msg),
        };
        ui.colored_label(color, text);
    }
}
