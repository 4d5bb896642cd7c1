//! Input model: tools, buttons, modifier keys, and the gesture state
//! machine.
//!
//! [`GestureState`] is the active pointer interaction being tracked
//! between pointer-down and pointer-up. Each active variant carries the
//! context captured at gesture start, so every pointer-move can be
//! resolved without consulting ambient state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::str::FromStr;

use crate::camera::Point;
use crate::doc::{ElementKind, InvalidElementKind};
use crate::geom::Bounds;
use crate::hit::HitPart;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pick, move, and resize existing elements.
    Selection,
    /// Draw a straight line.
    Line,
    /// Draw a rectangle.
    Rectangle,
    /// Draw a freehand stroke (default).
    #[default]
    Pencil,
    /// Place a text block.
    Text,
}

impl Tool {
    /// The element kind this tool creates, or `None` for the selection
    /// tool.
    #[must_use]
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            Self::Selection => None,
            Self::Line => Some(ElementKind::Line),
            Self::Rectangle => Some(ElementKind::Rectangle),
            Self::Pencil => Some(ElementKind::Pencil),
            Self::Text => Some(ElementKind::Text),
        }
    }
}

impl FromStr for Tool {
    type Err = InvalidElementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection" => Ok(Self::Selection),
            "line" => Ok(Self::Line),
            "rectangle" => Ok(Self::Rectangle),
            "pencil" => Ok(Self::Pencil),
            "text" => Ok(Self::Text),
            other => Err(InvalidElementKind(other.to_string())),
        }
    }
}

/// Mouse button identifier. Touch contact maps to `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Wheel / trackpad scroll delta in pixels (positive dy = down).
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// How a grabbed element follows the pointer while moving.
#[derive(Debug, Clone, PartialEq)]
pub enum Grab {
    /// Pencil strokes keep one offset per point so the whole polyline
    /// translates rigidly.
    Stroke { offsets: Vec<Point> },
    /// Bounding-box shapes keep the grab offset from `(x1, y1)` plus the
    /// anchor and extent captured at grab time.
    Box { offset: Point, origin: Point, width: f64, height: f64 },
}

/// The gesture state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Middle-button drag adjusting the pan offset.
    Panning {
        /// World position where the pan started, under the pan offset in
        /// effect at that moment.
        start_world: Point,
    },
    /// A new element is being sized or extended under the pointer.
    Drawing {
        /// Index of the element being drawn.
        index: usize,
    },
    /// An existing element is being dragged across the canvas.
    Moving {
        /// Index of the grabbed element.
        index: usize,
        /// Grab metadata captured at pointer-down.
        grab: Grab,
    },
    /// An existing element is being resized by one of its handles.
    Resizing {
        /// Index of the grabbed element.
        index: usize,
        /// Which handle is being dragged.
        handle: HitPart,
        /// Coordinate quad at the start of the resize; every move is
        /// resolved against this, not the live quad.
        start: Bounds,
    },
    /// A text element is open in the host's editor. Ends on text commit,
    /// not on pointer-up.
    Writing {
        /// Index of the element being edited.
        index: usize,
    },
}
