//! Hit-testing: which element, and which part of it, is under a point.
//!
//! Body hits and handle hits come back as one [`HitPart`] so the engine
//! can route a pointer-down to either a move or a resize gesture, and the
//! hover cursor can be derived from the same answer.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::{LINE_HIT_TOLERANCE, PENCIL_HIT_TOLERANCE};
use crate::doc::Element;
use crate::geom::{near_point, on_segment};

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The element body: segment interior, bounding-box interior, or any
    /// part of a pencil stroke.
    Inside,
    /// A rectangle corner handle.
    Corner(Corner),
    /// A line endpoint handle.
    Endpoint(EndPoint),
}

/// Corner handles of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Endpoint handles of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndPoint {
    Start,
    End,
}

/// Result of a hit test: the element's index within the scene plus the
/// part that was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub part: HitPart,
}

/// Test a point against one element.
///
/// Handle proximity wins over body membership: a point near a line
/// endpoint reports that endpoint even when it also lies on the segment,
/// and a point near a rectangle corner reports that corner even when it
/// is also inside the box. Pencil strokes and text have no handles.
#[must_use]
pub fn is_within_element(p: Point, element: &Element) -> Option<HitPart> {
    match element {
        Element::Line { x1, y1, x2, y2, .. } => {
            let a = Point::new(*x1, *y1);
            let b = Point::new(*x2, *y2);
            near_point(p, a, HitPart::Endpoint(EndPoint::Start))
                .or_else(|| near_point(p, b, HitPart::Endpoint(EndPoint::End)))
                .or_else(|| on_segment(a, b, p, LINE_HIT_TOLERANCE))
        }
        Element::Rectangle { x1, y1, x2, y2, .. } => {
            near_point(p, Point::new(*x1, *y1), HitPart::Corner(Corner::TopLeft))
                .or_else(|| near_point(p, Point::new(*x2, *y1), HitPart::Corner(Corner::TopRight)))
                .or_else(|| near_point(p, Point::new(*x1, *y2), HitPart::Corner(Corner::BottomLeft)))
                .or_else(|| near_point(p, Point::new(*x2, *y2), HitPart::Corner(Corner::BottomRight)))
                .or_else(|| in_box(p, *x1, *y1, *x2, *y2))
        }
        Element::Pencil { points, .. } => {
            let on_any_segment = points.windows(2).any(|pair| {
                on_segment(pair[0], pair[1], p, PENCIL_HIT_TOLERANCE).is_some()
            });
            if on_any_segment { Some(HitPart::Inside) } else { None }
        }
        Element::Text { x1, y1, x2, y2, .. } => in_box(p, *x1, *y1, *x2, *y2),
    }
}

fn in_box(p: Point, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<HitPart> {
    if p.x >= x1 && p.x <= x2 && p.y >= y1 && p.y <= y2 {
        Some(HitPart::Inside)
    } else {
        None
    }
}

/// Find the element under a point.
///
/// Scans in insertion order and returns the first match, so when elements
/// overlap the earliest-drawn one wins rather than the top-painted one.
#[must_use]
pub fn element_at_position(p: Point, scene: &[Element]) -> Option<Hit> {
    scene.iter().enumerate().find_map(|(index, element)| {
        is_within_element(p, element).map(|part| Hit { index, part })
    })
}
