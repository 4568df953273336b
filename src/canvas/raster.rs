// src/canvas/raster.rs
//! Rasterize the stroke list into an RGBA image using tiny-skia.

use image::RgbaImage;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{BrushStroke, CanvasState, CANVAS_HEIGHT, CANVAS_WIDTH};

fn blank_image() -> RgbaImage {
    RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, image::Rgba([255, 255, 255, 255]))
}

fn build_stroke_path(stroke: &BrushStroke) -> Option<tiny_skia::Path> {
    let first = stroke.points.first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in &stroke.points[1..] {
        pb.line_to(point.x, point.y);
    }
    pb.finish()
}

fn draw_stroke(pixmap: &mut Pixmap, stroke: &BrushStroke) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(
        stroke.color.r(),
        stroke.color.g(),
        stroke.color.b(),
        stroke.color.a(),
    );
    paint.anti_alias = true;

    if stroke.points.len() == 1 {
        // A tap with no movement: a zero-length line renders nothing, so
        // fill a dot with the brush radius instead.
        let p = stroke.points[0];
        if let Some(circle) = PathBuilder::from_circle(p.x, p.y, (stroke.width / 2.0).max(0.5)) {
            pixmap.fill_path(
                &circle,
                &paint,
                tiny_skia::FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        return;
    }

    let Some(path) = build_stroke_path(stroke) else {
        return;
    };

    let style = Stroke {
        width: stroke.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &style, Transform::identity(), None);
}

/// Render all strokes onto a white background at the canvas resolution.
///
/// The pixmap data is RGBA with premultiplied alpha, but every color drawn
/// here is opaque over an opaque background, so it can be copied into an
/// `RgbaImage` directly.
pub fn rasterize(state: &CanvasState) -> RgbaImage {
    let Some(mut pixmap) = Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT) else {
        return blank_image();
    };
    pixmap.fill(tiny_skia::Color::WHITE);

    // Includes the stroke still being dragged, so every state that is not
    // blank produces a non-white raster.
    for stroke in state.strokes.iter().chain(state.active.iter()) {
        draw_stroke(&mut pixmap, stroke);
    }

    log::debug!(
        "rasterized drawing: {}x{}, {} strokes",
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        state.strokes.len() + usize::from(state.active.is_some())
    );

    RgbaImage::from_raw(CANVAS_WIDTH, CANVAS_HEIGHT, pixmap.take())
        .unwrap_or_else(blank_image)
}
