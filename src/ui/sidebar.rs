// src/ui/sidebar.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Configuración");
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.strong("🎨 Herramientas de Dibujo");
        ui.add_space(4.0);
        ui.add(egui::Slider::new(&mut state.stroke_width, 1..=25).text("Ancho del trazo"));
        ui.horizontal(|ui| {
            ui.label("Color del trazo:");
            ui.color_edit_button_srgba(&mut state.stroke_color);
        });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.strong("🔑 Configuración API");
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut state.api_key)
                .password(true)
                .hint_text("Clave de OpenAI"),
        )
        .on_hover_text("Ingresa tu API key de OpenAI para usar la inteligencia artificial");
    });

    ui.add_space(12.0);
    ui.separator();

    ui.heading("Acerca de");
    ui.add_space(4.0);
    ui.label("Mythos Canvas analiza tus dibujos y revela:");
    ui.label("• Mitología relacionada");
    ui.label("• Datos científicos fascinantes");
    ui.label("• Historia y simbolismo");
    ui.label("• Conexiones culturales");
}
