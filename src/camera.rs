#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are the pan offset in world units. `zoom` is a scale
/// factor (1.0 = no zoom), clamped to `[MIN_ZOOM, MAX_ZOOM]`, and anchored
/// at the viewport center: zooming leaves the center of the screen fixed,
/// which is why the conversions need the viewport dimensions.
///
/// Camera state is session-transient and resets on reload.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// The displacement introduced by center-anchored zoom, in screen pixels.
    #[must_use]
    pub fn scale_offset(&self, viewport_w: f64, viewport_h: f64) -> Point {
        Point {
            x: viewport_w * (self.zoom - 1.0) / 2.0,
            y: viewport_h * (self.zoom - 1.0) / 2.0,
        }
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport_w: f64, viewport_h: f64) -> Point {
        let offset = self.scale_offset(viewport_w, viewport_h);
        Point {
            x: (screen.x - self.pan_x * self.zoom + offset.x) / self.zoom,
            y: (screen.y - self.pan_y * self.zoom + offset.y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport_w: f64, viewport_h: f64) -> Point {
        let offset = self.scale_offset(viewport_w, viewport_h);
        Point {
            x: world.x * self.zoom + self.pan_x * self.zoom - offset.x,
            y: world.y * self.zoom + self.pan_y * self.zoom - offset.y,
        }
    }

    /// Shift the pan offset by a world-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Set the zoom scale, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Adjust the zoom scale by a delta, clamped to the allowed range.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Restore the identity zoom.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }
}
