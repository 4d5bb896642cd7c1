//! Hand-drawn sketch generation for line and rectangle elements.
//!
//! Produces the jittered polylines that give strokes their rough,
//! sketched look. Generation is seeded from the element id, so the same
//! element always reproduces the same jitter; any coordinate change flows
//! into the control points and yields a new sketch. The output is a pure
//! render cache, never consulted by geometry or hit-testing.

#[cfg(test)]
#[path = "rough_test.rs"]
mod rough_test;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::camera::Point;
use crate::geom::Bounds;

/// Overall jitter intensity.
const ROUGHNESS: f64 = 1.0;

/// How far the stroke bows away from the straight line between endpoints.
const BOWING: f64 = 1.0;

/// Cap on random offsets in world units.
const MAX_RANDOMNESS_OFFSET: f64 = 2.0;

/// Samples taken along each jittered Bezier segment.
const CURVE_SEGMENTS: u32 = 10;

/// Cached hand-drawn geometry for one element: a set of polylines to
/// stroke in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    pub strokes: Vec<Vec<Point>>,
}

/// Sketch a line as a double-stroked jittered curve.
#[must_use]
pub fn sketch_line(seed: u64, a: Point, b: Point) -> Sketch {
    let mut generator = RoughGenerator::new(seed);
    Sketch {
        strokes: vec![
            generator.jittered_line(a, b),
            generator.jittered_line(a, b),
        ],
    }
}

/// Sketch a rectangle as four double-stroked sides.
#[must_use]
pub fn sketch_rectangle(seed: u64, b: Bounds) -> Sketch {
    let corners = [
        Point::new(b.x1, b.y1),
        Point::new(b.x2, b.y1),
        Point::new(b.x2, b.y2),
        Point::new(b.x1, b.y2),
    ];
    let mut generator = RoughGenerator::new(seed);
    let mut strokes = Vec::with_capacity(8);
    for i in 0..4 {
        let start = corners[i];
        let end = corners[(i + 1) % 4];
        strokes.push(generator.jittered_line(start, end));
        strokes.push(generator.jittered_line(start, end));
    }
    Sketch { strokes }
}

struct RoughGenerator {
    rng: StdRng,
}

impl RoughGenerator {
    fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    fn random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn offset(&mut self, min: f64, max: f64, gain: f64) -> f64 {
        ROUGHNESS * gain * (self.random() * (max - min) + min)
    }

    fn offset_sym(&mut self, x: f64, gain: f64) -> f64 {
        self.offset(-x, x, gain)
    }

    /// One jittered pass over the segment `a..b`: displaced endpoints with
    /// a bowed cubic Bezier between them, sampled into a polyline.
    fn jittered_line(&mut self, a: Point, b: Point) -> Vec<Point> {
        let length_sq = (a.x - b.x).powi(2) + (a.y - b.y).powi(2);
        let length = length_sq.sqrt();

        // Long segments get proportionally less jitter.
        let gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            -0.001_666_8 * length + 1.233_334
        };

        let mut offset = MAX_RANDOMNESS_OFFSET;
        if offset * offset * 100.0 > length_sq {
            offset = length / 10.0;
        }

        let diverge = 0.2 + self.random() * 0.2;
        let mid_x = BOWING * MAX_RANDOMNESS_OFFSET * (b.y - a.y) / 200.0;
        let mid_y = BOWING * MAX_RANDOMNESS_OFFSET * (a.x - b.x) / 200.0;
        let mid_x = mid_x + self.offset_sym(mid_x, gain);
        let mid_y = mid_y + self.offset_sym(mid_y, gain);

        let start = Point::new(
            a.x + self.offset_sym(offset, gain),
            a.y + self.offset_sym(offset, gain),
        );
        let control1 = Point::new(
            mid_x + a.x + (b.x - a.x) * diverge + self.offset_sym(offset, gain),
            mid_y + a.y + (b.y - a.y) * diverge + self.offset_sym(offset, gain),
        );
        let control2 = Point::new(
            mid_x + a.x + 2.0 * (b.x - a.x) * diverge + self.offset_sym(offset, gain),
            mid_y + a.y + 2.0 * (b.y - a.y) * diverge + self.offset_sym(offset, gain),
        );
        let end = Point::new(
            b.x + self.offset_sym(offset, gain),
            b.y + self.offset_sym(offset, gain),
        );

        let mut points = vec![start];
        points.extend(bezier(start, control1, control2, end, CURVE_SEGMENTS));
        points
    }
}

fn bezier(p0: Point, p1: Point, p2: Point, p3: Point, segments: u32) -> Vec<Point> {
    let mut points = Vec::with_capacity(segments as usize);
    for i in 1..=segments {
        let t = f64::from(i) / f64::from(segments);
        let u = 1.0 - t;
        let x = u.powi(3) * p0.x
            + 3.0 * u.powi(2) * t * p1.x
            + 3.0 * u * t.powi(2) * p2.x
            + t.powi(3) * p3.x;
        let y = u.powi(3) * p0.y
            + 3.0 * u.powi(2) * t * p1.y
            + 3.0 * u * t.powi(2) * p2.y
            + t.powi(3) * p3.y;
        points.push(Point::new(x, y));
    }
    points
}
