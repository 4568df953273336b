// src/state/mod.rs
use eframe::egui::Color32;

use crate::analysis::AnalysisClient;
use crate::canvas::{raster, CanvasState};
use crate::codec;

/// Transient banner shown under the analyze button.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

/// Request lifecycle. The requesting frame draws the busy indicator; the
/// blocking call runs at the start of the following frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Requesting,
}

/// Core application state, all scoped to one in-memory session.
pub struct AppState {
    // Drawing tools
    pub stroke_width: u32,
    pub stroke_color: Color32,
    pub canvas: CanvasState,

    // Credential, held in memory only
    pub api_key: String,

    // Session results
    pub analysis_done: bool,
    pub analysis_text: String,
    pub encoded_image: String,

    // Minimal UI state
    pub phase: Phase,
    pub notices: Vec<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            stroke_width: 8,
            stroke_color: Color32::from_rgb(139, 71, 137),
            canvas: CanvasState::new(),
            api_key: String::new(),
            analysis_done: false,
            analysis_text: String::new(),
            encoded_image: String::new(),
            phase: Phase::Idle,
            notices: Vec::new(),
        }
    }

    /// Handle an analyze-button activation. Each missing precondition is
    /// reported on its own so the user knows exactly what to fix; only when
    /// both are present does the session move to `Requesting`.
    pub fn request_analysis(&mut self) {
        self.notices.clear();

        let key_missing = self.api_key.trim().is_empty();
        let drawing_missing = self.canvas.is_blank();

        if key_missing {
            self.notices.push(Notice::Warning(
                "🔑 Por favor ingresa tu clave de API de OpenAI".into(),
            ));
        }
        if drawing_missing {
            self.notices.push(Notice::Info(
                "🎨 Dibuja algo en el panel para analizar".into(),
            ));
        }
        if key_missing || drawing_missing {
            return;
        }

        self.phase = Phase::Requesting;
    }

    /// Capture, encode, and perform the one blocking API call. On failure
    /// the previous result text and done flag are left untouched.
    pub fn run_analysis(&mut self, client: &AnalysisClient) {
        self.phase = Phase::Idle;

        let img = raster::rasterize(&self.canvas);
        let data_uri = match codec::encode_drawing(&img) {
            Ok(uri) => uri,
            Err(e) => {
                log::error!("failed to encode drawing: {e:#}");
                self.notices
                    .push(Notice::Error(format!("❌ Error al codificar el dibujo: {e}")));
                return;
            }
        };
        self.encoded_image = data_uri.clone();

        match client.analyze(&self.api_key, &data_uri) {
            Ok(text) => {
                self.analysis_text = text;
                self.analysis_done = true;
                self.notices.clear();
                log::info!("analysis complete ({} chars)", self.analysis_text.len());
            }
            Err(e) => {
                log::warn!("analysis failed: {e}");
                self.notices
                    .push(Notice::Error(format!("❌ Error en el análisis: {}", e)));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
