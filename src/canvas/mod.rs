// src/canvas/mod.rs
use eframe::egui::{self, Color32, Pos2, Sense, Stroke, Vec2};

pub mod raster;

/// Logical canvas size in pixels. The rasterized drawing uses the same
/// dimensions, so stroke coordinates map 1:1 onto image pixels.
pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;

/// One freehand stroke: a polyline in canvas-local coordinates, captured
/// with the width and color that were active when the drag started.
#[derive(Debug, Clone)]
pub struct BrushStroke {
    pub points: Vec<Pos2>,
    pub width: f32,
    pub color: Color32,
}

/// Stroke list backing the drawing surface.
#[derive(Debug, Default)]
pub struct CanvasState {
    pub strokes: Vec<BrushStroke>,
    active: Option<BrushStroke>,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been drawn. The codec and the analysis request
    /// are both skipped for a blank canvas.
    pub fn is_blank(&self) -> bool {
        self.strokes.is_empty() && self.active.is_none()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = None;
    }

    fn begin_stroke(&mut self, pos: Pos2, width: f32, color: Color32) {
        self.active = Some(BrushStroke {
            points: vec![pos],
            width,
            color,
        });
    }

    fn extend_stroke(&mut self, pos: Pos2) {
        if let Some(stroke) = self.active.as_mut() {
            // Skip duplicate samples when the pointer hasn't moved.
            if stroke.points.last().map_or(true, |last| *last != pos) {
                stroke.points.push(pos);
            }
        }
    }

    fn finish_stroke(&mut self) {
        if let Some(stroke) = self.active.take() {
            self.strokes.push(stroke);
        }
    }
}

fn clamp_to_canvas(pos: Pos2) -> Pos2 {
    Pos2::new(
        pos.x.clamp(0.0, CANVAS_WIDTH as f32),
        pos.y.clamp(0.0, CANVAS_HEIGHT as f32),
    )
}

/// Draw the canvas widget and feed pointer drags into the stroke list.
pub fn show_canvas(
    ui: &mut egui::Ui,
    state: &mut CanvasState,
    stroke_width: f32,
    stroke_color: Color32,
) {
    let size = Vec2::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
    let (response, painter) = ui.allocate_painter(size, Sense::drag());
    let rect = response.rect;

    // White drawing area with an accent border.
    painter.rect_filled(rect, 4.0, Color32::WHITE);
    painter.rect_stroke(rect, 4.0, Stroke::new(2.0, Color32::from_rgb(230, 168, 215)));

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = clamp_to_canvas(pos - rect.min.to_vec2());
            state.begin_stroke(local, stroke_width, stroke_color);
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = clamp_to_canvas(pos - rect.min.to_vec2());
            state.extend_stroke(local);
        }
    }
    if response.drag_released() {
        state.finish_stroke();
    }

    // Render finished strokes plus the one in progress.
    let all = state.strokes.iter().chain(state.active.iter());
    for stroke in all {
        let style = Stroke::new(stroke.width, stroke.color);
        if stroke.points.len() == 1 {
            let center = rect.min + stroke.points[0].to_vec2();
            painter.circle_filled(center, stroke.width / 2.0, stroke.color);
        } else {
            for pair in stroke.points.windows(2) {
                let a = rect.min + pair[0].to_vec2();
                let b = rect.min + pair[1].to_vec2();
                painter.line_segment([a, b], style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_until_a_stroke_is_captured() {
        let mut state = CanvasState::new();
        assert!(state.is_blank());

        state.begin_stroke(Pos2::new(10.0, 10.0), 8.0, Color32::BLACK);
        assert!(!state.is_blank());

        state.extend_stroke(Pos2::new(20.0, 12.0));
        state.finish_stroke();
        assert_eq!(state.strokes.len(), 1);
        assert_eq!(state.strokes[0].points.len(), 2);
    }

    #[test]
    fn clear_empties_the_stroke_list() {
        let mut state = CanvasState::new();
        state.begin_stroke(Pos2::new(1.0, 1.0), 4.0, Color32::RED);
        state.finish_stroke();
        state.clear();
        assert!(state.is_blank());
    }

    #[test]
    fn duplicate_pointer_samples_are_dropped() {
        let mut state = CanvasState::new();
        state.begin_stroke(Pos2::new(5.0, 5.0), 8.0, Color32::BLACK);
        state.extend_stroke(Pos2::new(5.0, 5.0));
        state.extend_stroke(Pos2::new(6.0, 5.0));
        state.finish_stroke();
        assert_eq!(state.strokes[0].points.len(), 2);
    }
}
