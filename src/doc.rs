//! Document model: whiteboard elements, the scene, and the element factory.
//!
//! An [`Element`] is a tagged union over the four drawable kinds. Elements
//! are identified by their index within the owning scene snapshot; the
//! scene supports neither deletion nor reordering, so index identity is
//! stable for the life of a snapshot. Scenes are persisted as JSON via
//! serde; the hand-drawn sketch cache is skipped and rebuilt on load.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Point;
use crate::geom::Bounds;
use crate::rough::{self, Sketch};

/// An element kind name that is not part of the closed tool set.
///
/// Raised at the string boundary only (host tool names, stored JSON); the
/// in-memory model is a closed enum and cannot hold an unknown kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized element kind: {0:?}")]
pub struct InvalidElementKind(pub String);

/// The kind of a whiteboard element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Straight line segment between two endpoints.
    Line,
    /// Axis-aligned rectangle spanned by two corners.
    Rectangle,
    /// Freehand stroke through an ordered point sequence.
    Pencil,
    /// Text block anchored at its top-left corner.
    Text,
}

impl FromStr for ElementKind {
    type Err = InvalidElementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "rectangle" => Ok(Self::Rectangle),
            "pencil" => Ok(Self::Pencil),
            "text" => Ok(Self::Text),
            other => Err(InvalidElementKind(other.to_string())),
        }
    }
}

/// One version of the whole drawing: elements in insertion order, which is
/// also paint order (later elements draw on top).
pub type Scene = Vec<Element>;

/// A whiteboard element as stored in a scene snapshot.
///
/// `id` is the element's index within its snapshot. For `Line` and
/// `Rectangle` the coordinate quad is canonicalized when an interactive
/// edit finishes; mid-gesture the quad may be in any orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Line {
        id: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Render cache, rebuilt whenever the coordinates change.
        #[serde(skip)]
        sketch: Sketch,
    },
    Rectangle {
        id: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Render cache, rebuilt whenever the coordinates change.
        #[serde(skip)]
        sketch: Sketch,
    },
    Pencil {
        id: usize,
        points: Vec<Point>,
        stroke_width: f64,
    },
    Text {
        id: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        text: String,
        font_size: f64,
    },
}

impl Element {
    /// The element's index within its owning snapshot.
    #[must_use]
    pub fn id(&self) -> usize {
        match self {
            Self::Line { id, .. }
            | Self::Rectangle { id, .. }
            | Self::Pencil { id, .. }
            | Self::Text { id, .. } => *id,
        }
    }

    /// The element's kind tag.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Line { .. } => ElementKind::Line,
            Self::Rectangle { .. } => ElementKind::Rectangle,
            Self::Pencil { .. } => ElementKind::Pencil,
            Self::Text { .. } => ElementKind::Text,
        }
    }

    /// The coordinate quad for elements that have one. Pencil strokes are
    /// defined by their point sequence and have no quad.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Line { x1, y1, x2, y2, .. }
            | Self::Rectangle { x1, y1, x2, y2, .. }
            | Self::Text { x1, y1, x2, y2, .. } => Some(Bounds::new(*x1, *y1, *x2, *y2)),
            Self::Pencil { .. } => None,
        }
    }

    /// Replace the coordinate quad, rebuilding the sketch cache for the
    /// kinds that carry one. No-op for pencil strokes.
    pub fn set_bounds(&mut self, b: Bounds) {
        match self {
            Self::Line { id, x1, y1, x2, y2, sketch } => {
                *x1 = b.x1;
                *y1 = b.y1;
                *x2 = b.x2;
                *y2 = b.y2;
                *sketch = rough::sketch_line(*id as u64, Point::new(b.x1, b.y1), Point::new(b.x2, b.y2));
            }
            Self::Rectangle { id, x1, y1, x2, y2, sketch } => {
                *x1 = b.x1;
                *y1 = b.y1;
                *x2 = b.x2;
                *y2 = b.y2;
                *sketch = rough::sketch_rectangle(*id as u64, b);
            }
            Self::Text { x1, y1, x2, y2, .. } => {
                *x1 = b.x1;
                *y1 = b.y1;
                *x2 = b.x2;
                *y2 = b.y2;
            }
            Self::Pencil { .. } => {}
        }
    }

    /// Rebuild the sketch cache from the current coordinates. Needed after
    /// deserialization, since sketches are not persisted.
    pub fn refresh_sketch(&mut self) {
        match self {
            Self::Line { id, x1, y1, x2, y2, sketch } => {
                *sketch = rough::sketch_line(*id as u64, Point::new(*x1, *y1), Point::new(*x2, *y2));
            }
            Self::Rectangle { id, x1, y1, x2, y2, sketch } => {
                *sketch = rough::sketch_rectangle(*id as u64, Bounds::new(*x1, *y1, *x2, *y2));
            }
            Self::Pencil { .. } | Self::Text { .. } => {}
        }
    }
}

/// Style inputs captured from the UI at creation time.
#[derive(Debug, Clone, Copy)]
pub struct ElementStyle {
    pub stroke_width: f64,
    pub font_size: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke_width: crate::consts::DEFAULT_STROKE_WIDTH,
            font_size: crate::consts::DEFAULT_FONT_SIZE,
        }
    }
}

/// Construct a new element of the given kind.
///
/// Line and rectangle get a freshly generated sketch. Pencil ignores the
/// trailing coordinates and seeds a single-point stroke with the active
/// stroke width. Text starts empty; its extent is derived from measured
/// text at commit time, not user-drawn.
#[must_use]
pub fn create_element(
    id: usize,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    kind: ElementKind,
    style: ElementStyle,
) -> Element {
    match kind {
        ElementKind::Line => Element::Line {
            id,
            x1,
            y1,
            x2,
            y2,
            sketch: rough::sketch_line(id as u64, Point::new(x1, y1), Point::new(x2, y2)),
        },
        ElementKind::Rectangle => Element::Rectangle {
            id,
            x1,
            y1,
            x2,
            y2,
            sketch: rough::sketch_rectangle(id as u64, Bounds::new(x1, y1, x2, y2)),
        },
        ElementKind::Pencil => Element::Pencil {
            id,
            points: vec![Point::new(x1, y1)],
            stroke_width: style.stroke_width,
        },
        ElementKind::Text => Element::Text {
            id,
            x1,
            y1,
            x2,
            y2,
            text: String::new(),
            font_size: style.font_size,
        },
    }
}
