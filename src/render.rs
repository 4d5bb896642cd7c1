//! Rendering: draws the current scene to a 2D canvas context.
//!
//! This is the only module that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only scene and camera state and produces pixels; it
//! never mutates application state. All fallible Canvas2D calls propagate
//! errors via `Result<(), JsValue>` to the caller
//! ([`crate::engine::Engine::render`]).

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::MIN_FREEHAND_POINTS;
use crate::doc::Element;
use crate::rough::Sketch;

/// Draw the full scene behind the camera transform.
///
/// `skip` names the element currently open in the host's text editor; it
/// is excluded so it is not drawn beneath the editor widget.
///
/// # Errors
///
/// Returns `Err` if any Canvas2D call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &[Element],
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    skip: Option<usize>,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    ctx.save();
    let offset = camera.scale_offset(viewport_w, viewport_h);
    ctx.translate(
        camera.pan_x * camera.zoom - offset.x,
        camera.pan_y * camera.zoom - offset.y,
    )?;
    ctx.scale(camera.zoom, camera.zoom)?;

    for (index, element) in scene.iter().enumerate() {
        if skip == Some(index) {
            continue;
        }
        draw_element(ctx, element)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_element(ctx: &CanvasRenderingContext2d, element: &Element) -> Result<(), JsValue> {
    match element {
        Element::Line { sketch, .. } | Element::Rectangle { sketch, .. } => {
            draw_sketch(ctx, sketch);
            Ok(())
        }
        Element::Pencil { points, stroke_width, .. } => {
            draw_stroke(ctx, points, *stroke_width);
            Ok(())
        }
        Element::Text { x1, y1, text, font_size, .. } => draw_text(ctx, *x1, *y1, text, *font_size),
    }
}

/// Stroke the cached hand-drawn polylines.
fn draw_sketch(ctx: &CanvasRenderingContext2d, sketch: &Sketch) {
    for stroke in &sketch.strokes {
        let Some(first) = stroke.first() else {
            continue;
        };
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for point in &stroke[1..] {
            ctx.line_to(point.x, point.y);
        }
        ctx.stroke();
    }
}

/// Stroke a smoothed freehand path through the pencil points: quadratic
/// curves through each point toward the midpoint of the next pair. No
/// stroke path is defined below [`MIN_FREEHAND_POINTS`] points, so
/// shorter strokes render nothing.
fn draw_stroke(ctx: &CanvasRenderingContext2d, points: &[Point], stroke_width: f64) {
    if points.len() < MIN_FREEHAND_POINTS {
        return;
    }
    ctx.set_line_width(stroke_width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    for pair in points[1..].windows(2) {
        let control = pair[0];
        let mid = Point::new((pair[0].x + pair[1].x) / 2.0, (pair[0].y + pair[1].y) / 2.0);
        ctx.quadratic_curve_to(control.x, control.y, mid.x, mid.y);
    }
    if let Some(last) = points.last() {
        ctx.line_to(last.x, last.y);
    }
    ctx.stroke();
}

fn draw_text(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    text: &str,
    font_size: f64,
) -> Result<(), JsValue> {
    ctx.set_text_baseline("top");
    ctx.set_font(&format!("{font_size}px sans-serif"));
    ctx.fill_text(text, x, y)
}
