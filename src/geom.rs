//! Geometry kernel: pure functions over points and coordinate quads.
//!
//! Everything here is stateless. The hit module layers element knowledge on
//! top of these primitives; the engine uses the canonicalization and resize
//! transforms when a gesture ends or a handle is dragged.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::camera::Point;
use crate::consts::HANDLE_TOLERANCE;
use crate::doc::ElementKind;
use crate::hit::{Corner, EndPoint, HitPart};

/// A coordinate quad: two corners of a bounding box, or the two endpoints
/// of a line. No ordering is guaranteed until canonicalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Returns `part` when `p` lies within the square handle tolerance of
/// `target`. The tolerance is applied per axis, not as a radius.
#[must_use]
pub fn near_point(p: Point, target: Point, part: HitPart) -> Option<HitPart> {
    if (p.x - target.x).abs() < HANDLE_TOLERANCE && (p.y - target.y).abs() < HANDLE_TOLERANCE {
        Some(part)
    } else {
        None
    }
}

/// Approximate colinearity-and-betweenness test: `p` counts as on the
/// segment `a..b` when the triangle-inequality slack
/// `dist(a,b) - (dist(a,p) + dist(b,p))` is within `tolerance` of zero.
#[must_use]
pub fn on_segment(a: Point, b: Point, p: Point, tolerance: f64) -> Option<HitPart> {
    let slack = distance(a, b) - (distance(a, p) + distance(b, p));
    if slack.abs() < tolerance {
        Some(HitPart::Inside)
    } else {
        None
    }
}

/// Whether this element kind gets its coordinates canonicalized when a
/// drawing or resizing gesture ends.
#[must_use]
pub fn adjustment_required(kind: ElementKind) -> bool {
    matches!(kind, ElementKind::Line | ElementKind::Rectangle)
}

/// Canonicalize a coordinate quad for the given kind. Rectangles come out
/// with `(x1, y1)` as the top-left corner; lines with the first endpoint
/// lexicographically smaller by `(x, then y)`. Other kinds pass through.
#[must_use]
pub fn adjust_element_coordinates(kind: ElementKind, b: Bounds) -> Bounds {
    match kind {
        ElementKind::Rectangle => Bounds {
            x1: b.x1.min(b.x2),
            y1: b.y1.min(b.y2),
            x2: b.x1.max(b.x2),
            y2: b.y1.max(b.y2),
        },
        ElementKind::Line => {
            let keep = if b.x1 < b.x2 {
                true
            } else if b.x1 > b.x2 {
                false
            } else {
                b.y1 < b.y2
            };
            if keep {
                b
            } else {
                Bounds { x1: b.x2, y1: b.y2, x2: b.x1, y2: b.y1 }
            }
        }
        ElementKind::Pencil | ElementKind::Text => b,
    }
}

/// New coordinates for a resize drag: the grabbed handle follows the
/// cursor while the opposite corner or endpoint stays put. A body hit is
/// not a handle and yields `None`.
#[must_use]
pub fn resized_coordinates(cursor: Point, handle: HitPart, b: Bounds) -> Option<Bounds> {
    match handle {
        HitPart::Corner(Corner::TopLeft) | HitPart::Endpoint(EndPoint::Start) => {
            Some(Bounds { x1: cursor.x, y1: cursor.y, x2: b.x2, y2: b.y2 })
        }
        HitPart::Corner(Corner::TopRight) => {
            Some(Bounds { x1: b.x1, y1: cursor.y, x2: cursor.x, y2: b.y2 })
        }
        HitPart::Corner(Corner::BottomLeft) => {
            Some(Bounds { x1: cursor.x, y1: b.y1, x2: b.x2, y2: cursor.y })
        }
        HitPart::Corner(Corner::BottomRight) | HitPart::Endpoint(EndPoint::End) => {
            Some(Bounds { x1: b.x1, y1: b.y1, x2: cursor.x, y2: cursor.y })
        }
        HitPart::Inside => None,
    }
}

/// Mouse cursor to show while hovering a hit part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Resizing along the main diagonal (top-left / bottom-right, endpoints).
    DiagonalResize,
    /// Resizing along the anti-diagonal (top-right / bottom-left).
    AntiDiagonalResize,
    /// Hovering an element body.
    Move,
}

impl Cursor {
    /// The CSS cursor keyword for the host to apply.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::DiagonalResize => "nwse-resize",
            Self::AntiDiagonalResize => "nesw-resize",
            Self::Move => "move",
        }
    }
}

/// Map a hit part to the cursor shown while hovering it.
#[must_use]
pub fn cursor_for_position(part: HitPart) -> Cursor {
    match part {
        HitPart::Corner(Corner::TopLeft | Corner::BottomRight) | HitPart::Endpoint(_) => {
            Cursor::DiagonalResize
        }
        HitPart::Corner(Corner::TopRight | Corner::BottomLeft) => Cursor::AntiDiagonalResize,
        HitPart::Inside => Cursor::Move,
    }
}
