//! Shared numeric constants for the whiteboard engine.

// ── Hit-testing ─────────────────────────────────────────────────

/// Per-axis tolerance in world units for endpoint and corner handles.
/// Applied independently to x and y, so the hot zone is a square.
pub const HANDLE_TOLERANCE: f64 = 5.0;

/// Triangle-inequality slack below which a point counts as on a line segment.
pub const LINE_HIT_TOLERANCE: f64 = 1.0;

/// Slack for pencil stroke segments, widened to tolerate stroke thickness.
pub const PENCIL_HIT_TOLERANCE: f64 = 5.0;

// ── Camera ──────────────────────────────────────────────────────

/// Lower zoom clamp.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom clamp.
pub const MAX_ZOOM: f64 = 20.0;

/// Zoom change per wheel-delta unit when the zoom modifier is held.
pub const WHEEL_ZOOM_STEP: f64 = 0.001;

// ── Element defaults ────────────────────────────────────────────

/// Default pencil stroke width in world units.
pub const DEFAULT_STROKE_WIDTH: f64 = 8.0;

/// Pencil stroke width slider range.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
pub const MAX_STROKE_WIDTH: f64 = 60.0;

/// Default text font size in world units.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;

/// Font size slider range.
pub const MIN_FONT_SIZE: f64 = 15.0;
pub const MAX_FONT_SIZE: f64 = 60.0;

// ── Rendering ───────────────────────────────────────────────────

/// Minimum number of pencil points before a stroke path is defined.
/// Below this the renderer draws nothing.
pub const MIN_FREEHAND_POINTS: usize = 4;

// ── Text editing ────────────────────────────────────────────────

/// Delay before the host focuses its text editor, giving the widget
/// time to mount.
pub const TEXT_FOCUS_DELAY_MS: u32 = 50;
