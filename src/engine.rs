//! Top-level engine: gesture orchestration and the host command surface.
//!
//! [`EngineCore`] holds all state and logic that does not depend on the
//! browser, so it can be tested natively. [`Engine`] wraps it with the
//! canvas element, text measurement, history persistence, and render
//! driving. Hosts call a command, then interpret the returned [`Action`]s;
//! nothing redraws or persists implicitly.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{
    DEFAULT_FONT_SIZE, DEFAULT_STROKE_WIDTH, MAX_FONT_SIZE, MAX_STROKE_WIDTH, MIN_FONT_SIZE,
    MIN_STROKE_WIDTH, TEXT_FOCUS_DELAY_MS, WHEEL_ZOOM_STEP,
};
use crate::doc::{Element, ElementKind, ElementStyle, create_element};
use crate::geom;
use crate::history::History;
use crate::hit::{self, HitPart};
use crate::input::{Button, GestureState, Grab, Modifiers, Tool, WheelDelta};
use crate::{render, storage};

/// Effects returned from engine commands for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The scene or camera changed; redraw.
    RenderNeeded,
    /// The history store changed; persist it.
    HistoryChanged,
    /// Apply this CSS cursor to the canvas.
    SetCursor(String),
    /// Mount the text editor over the given element and focus it after
    /// the delay, so the widget has time to mount first.
    EditTextRequested {
        /// Index of the text element being edited.
        index: usize,
        /// Screen-space x of the element's anchor.
        x: f64,
        /// Screen-space y of the element's anchor.
        y: f64,
        /// Screen-space font size (world size scaled by the zoom).
        font_size: f64,
        /// Current text content to seed the editor with.
        text: String,
        /// Milliseconds to wait before grabbing focus.
        focus_delay_ms: u32,
    },
}

/// Tool settings owned by the engine and visible to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Stroke width applied to new and updated pencil strokes.
    pub stroke_width: f64,
    /// Font size applied to new text elements.
    pub font_size: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Core engine state, free of browser dependencies.
pub struct EngineCore {
    pub history: History,
    pub camera: Camera,
    pub ui: UiState,
    pub gesture: GestureState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            history: History::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            gesture: GestureState::Idle,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously persisted history.
    #[must_use]
    pub fn with_history(history: History) -> Self {
        Self { history, ..Self::default() }
    }

    // ── Settings ────────────────────────────────────────────────

    /// Update viewport dimensions in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Set the pencil stroke width, clamped to the slider range.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.ui.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    /// Set the text font size, clamped to the slider range.
    pub fn set_font_size(&mut self, size: f64) {
        self.ui.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    // ── History commands ────────────────────────────────────────

    /// Step back one snapshot. No-op at the initial scene.
    pub fn undo(&mut self) -> Vec<Action> {
        if self.history.undo() {
            vec![Action::HistoryChanged, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Step forward one snapshot. No-op at the newest snapshot.
    pub fn redo(&mut self) -> Vec<Action> {
        if self.history.redo() {
            vec![Action::HistoryChanged, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Rewind to the empty initial scene, keeping snapshots redoable.
    pub fn clear(&mut self) -> Vec<Action> {
        if self.history.cursor() == 0 {
            return Vec::new();
        }
        self.history.clear();
        vec![Action::HistoryChanged, Action::RenderNeeded]
    }

    // ── Camera commands ─────────────────────────────────────────

    /// Set the zoom scale; out-of-range values clamp.
    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        self.camera.set_zoom(zoom);
        vec![Action::RenderNeeded]
    }

    /// Adjust the zoom scale by a delta; the result clamps.
    pub fn zoom_by(&mut self, delta: f64) -> Vec<Action> {
        self.camera.zoom_by(delta);
        vec![Action::RenderNeeded]
    }

    /// Restore the identity zoom.
    pub fn reset_zoom(&mut self) -> Vec<Action> {
        self.camera.reset_zoom();
        vec![Action::RenderNeeded]
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Convert a raw pointer position to world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        self.camera.screen_to_world(screen, self.viewport_width, self.viewport_height)
    }

    /// Index of the element open in the text editor, if any. The renderer
    /// excludes it so it is not drawn beneath the editor widget.
    #[must_use]
    pub fn writing_index(&self) -> Option<usize> {
        match self.gesture {
            GestureState::Writing { index } => Some(index),
            _ => None,
        }
    }

    // ── Pointer events ──────────────────────────────────────────

    /// Begin a gesture. Ignored while a text edit is open; the edit ends
    /// on text commit, not on another pointer-down.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if matches!(self.gesture, GestureState::Writing { .. }) {
            return Vec::new();
        }
        let world = self.to_world(screen);
        if button == Button::Middle {
            self.gesture = GestureState::Panning { start_world: world };
            return Vec::new();
        }
        match self.ui.tool.element_kind() {
            None => self.grab_element_at(world),
            Some(kind) => self.start_element(world, kind),
        }
    }

    /// Update the active gesture with a new pointer position.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let world = self.to_world(screen);
        let mut actions = Vec::new();

        // Hover feedback runs whenever the selection tool is active, even
        // mid-gesture.
        if self.ui.tool == Tool::Selection {
            let cursor = hit::element_at_position(world, self.history.current())
                .map_or("default", |h| geom::cursor_for_position(h.part).as_css());
            actions.push(Action::SetCursor(cursor.to_string()));
        }

        match self.gesture.clone() {
            GestureState::Panning { start_world } => {
                self.camera.pan_by(world.x - start_world.x, world.y - start_world.y);
                actions.push(Action::RenderNeeded);
            }
            GestureState::Drawing { index } => {
                self.extend_element(index, world);
                actions.push(Action::HistoryChanged);
                actions.push(Action::RenderNeeded);
            }
            GestureState::Moving { index, grab } => {
                self.move_element(index, world, &grab);
                actions.push(Action::HistoryChanged);
                actions.push(Action::RenderNeeded);
            }
            GestureState::Resizing { index, handle, start } => {
                if let Some(resized) = geom::resized_coordinates(world, handle, start) {
                    self.update_element_bounds(index, resized);
                    actions.push(Action::HistoryChanged);
                    actions.push(Action::RenderNeeded);
                }
            }
            GestureState::Idle | GestureState::Writing { .. } => {}
        }
        actions
    }

    /// End the active gesture. Canonicalizes line/rectangle coordinates
    /// on exit from drawing or resizing. Releasing a grabbed text element
    /// without net movement opens it for editing instead.
    pub fn on_pointer_up(&mut self, screen: Point) -> Vec<Action> {
        let world = self.to_world(screen);
        let mut actions = Vec::new();

        match self.gesture.clone() {
            GestureState::Writing { .. } => return actions,
            GestureState::Moving { index, grab: Grab::Box { offset, origin, .. } } => {
                if let Some(Element::Text { .. }) = self.history.current().get(index) {
                    // Compared against the grab-time anchor, so a drag that
                    // ends where it started still counts as a plain click.
                    let unmoved = (world.x - offset.x - origin.x).abs() < f64::EPSILON
                        && (world.y - offset.y - origin.y).abs() < f64::EPSILON;
                    if unmoved {
                        self.gesture = GestureState::Writing { index };
                        if let Some(action) = self.edit_text_action(index) {
                            actions.push(action);
                        }
                        return actions;
                    }
                }
                self.gesture = GestureState::Idle;
            }
            GestureState::Drawing { index } | GestureState::Resizing { index, .. } => {
                if let Some(element) = self.history.current().get(index) {
                    if geom::adjustment_required(element.kind()) {
                        if let Some(bounds) = element.bounds() {
                            let adjusted = geom::adjust_element_coordinates(element.kind(), bounds);
                            self.update_element_bounds(index, adjusted);
                            actions.push(Action::HistoryChanged);
                            actions.push(Action::RenderNeeded);
                        }
                    }
                }
                self.gesture = GestureState::Idle;
            }
            GestureState::Idle
            | GestureState::Panning { .. }
            | GestureState::Moving { .. } => {
                self.gesture = GestureState::Idle;
            }
        }
        actions
    }

    /// Wheel input: zoom when the Alt modifier is held, pan otherwise.
    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.alt {
            self.camera.zoom_by(delta.dy * -WHEEL_ZOOM_STEP);
        } else {
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::RenderNeeded]
    }

    /// Commit the text editor's content into the element being written.
    ///
    /// `measured_width` is the pixel width of `text` at the element's font
    /// size, supplied by the caller so this stays measurable without a
    /// canvas. Closes the writing state.
    pub fn commit_text(&mut self, text: &str, measured_width: f64) -> Vec<Action> {
        let index = match self.gesture {
            GestureState::Writing { index } => index,
            _ => return Vec::new(),
        };
        self.gesture = GestureState::Idle;

        let mut scene = self.history.current().clone();
        let Some(Element::Text { x1, y1, x2, y2, text: content, font_size, .. }) =
            scene.get_mut(index)
        else {
            return Vec::new();
        };
        *content = text.to_string();
        *x2 = *x1 + measured_width;
        *y2 = *y1 + *font_size;
        self.history.overwrite(scene);
        vec![Action::HistoryChanged, Action::RenderNeeded]
    }

    // ── Gesture internals ───────────────────────────────────────

    /// Append a new element at the pointer and enter the matching gesture.
    fn start_element(&mut self, world: Point, kind: ElementKind) -> Vec<Action> {
        let mut scene = self.history.current().clone();
        let id = scene.len();
        let style = ElementStyle {
            stroke_width: self.ui.stroke_width,
            font_size: self.ui.font_size,
        };
        scene.push(create_element(id, world.x, world.y, world.x, world.y, kind, style));
        self.history.commit(scene);

        let mut actions = vec![Action::HistoryChanged, Action::RenderNeeded];
        if kind == ElementKind::Text {
            self.gesture = GestureState::Writing { index: id };
            if let Some(action) = self.edit_text_action(id) {
                actions.push(action);
            }
        } else {
            self.gesture = GestureState::Drawing { index: id };
        }
        actions
    }

    /// Grab the element under the pointer for a move or resize. Commits a
    /// duplicate snapshot first, so the in-gesture overwrites leave the
    /// pre-gesture state undoable.
    fn grab_element_at(&mut self, world: Point) -> Vec<Action> {
        let scene = self.history.current().clone();
        let Some(found) = hit::element_at_position(world, &scene) else {
            return Vec::new();
        };
        let Some(element) = scene.get(found.index) else {
            return Vec::new();
        };

        let next = match (found.part, element) {
            (HitPart::Inside, Element::Pencil { points, .. }) => {
                let offsets = points
                    .iter()
                    .map(|p| Point::new(world.x - p.x, world.y - p.y))
                    .collect();
                GestureState::Moving { index: found.index, grab: Grab::Stroke { offsets } }
            }
            (HitPart::Inside, el) => {
                let Some(b) = el.bounds() else { return Vec::new() };
                let grab = Grab::Box {
                    offset: Point::new(world.x - b.x1, world.y - b.y1),
                    origin: Point::new(b.x1, b.y1),
                    width: b.x2 - b.x1,
                    height: b.y2 - b.y1,
                };
                GestureState::Moving { index: found.index, grab }
            }
            (handle, el) => {
                let Some(b) = el.bounds() else { return Vec::new() };
                GestureState::Resizing { index: found.index, handle, start: b }
            }
        };

        self.history.commit(scene);
        self.gesture = next;
        vec![Action::HistoryChanged]
    }

    /// Grow the element being drawn toward the pointer: lines and
    /// rectangles re-anchor their second corner, pencil strokes append.
    fn extend_element(&mut self, index: usize, world: Point) {
        let stroke_width = self.ui.stroke_width;
        let mut scene = self.history.current().clone();
        let Some(element) = scene.get_mut(index) else {
            return;
        };
        match element.kind() {
            ElementKind::Line | ElementKind::Rectangle => {
                if let Some(b) = element.bounds() {
                    element.set_bounds(geom::Bounds::new(b.x1, b.y1, world.x, world.y));
                }
            }
            ElementKind::Pencil => {
                if let Element::Pencil { points, stroke_width: width, .. } = element {
                    points.push(world);
                    *width = stroke_width;
                }
            }
            ElementKind::Text => {}
        }
        self.history.overwrite(scene);
    }

    /// Translate a grabbed element rigidly under the pointer.
    fn move_element(&mut self, index: usize, world: Point, grab: &Grab) {
        let mut scene = self.history.current().clone();
        let Some(element) = scene.get_mut(index) else {
            return;
        };
        match (element, grab) {
            (Element::Pencil { points, .. }, Grab::Stroke { offsets }) => {
                if points.len() == offsets.len() {
                    for (point, offset) in points.iter_mut().zip(offsets) {
                        point.x = world.x - offset.x;
                        point.y = world.y - offset.y;
                    }
                }
            }
            (el, Grab::Box { offset, width, height, .. }) => {
                let x1 = world.x - offset.x;
                let y1 = world.y - offset.y;
                el.set_bounds(geom::Bounds::new(x1, y1, x1 + width, y1 + height));
            }
            _ => {}
        }
        self.history.overwrite(scene);
    }

    /// Replace an element's coordinate quad via an in-place overwrite.
    fn update_element_bounds(&mut self, index: usize, bounds: geom::Bounds) {
        let mut scene = self.history.current().clone();
        let Some(element) = scene.get_mut(index) else {
            return;
        };
        element.set_bounds(bounds);
        self.history.overwrite(scene);
    }

    fn edit_text_action(&self, index: usize) -> Option<Action> {
        let Element::Text { x1, y1, text, font_size, .. } =
            self.history.current().get(index)?
        else {
            return None;
        };
        let screen = self.camera.world_to_screen(
            Point::new(*x1, *y1),
            self.viewport_width,
            self.viewport_height,
        );
        Some(Action::EditTextRequested {
            index,
            x: screen.x,
            y: screen.y,
            font_size: font_size * self.camera.zoom,
            text: text.clone(),
            focus_delay_ms: TEXT_FOCUS_DELAY_MS,
        })
    }
}

/// The full engine: wraps [`EngineCore`] and owns the browser canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element, restoring any
    /// persisted history.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::with_history(storage::load()) }
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let object = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?;
        object
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    /// Persist the history when any of the actions changed it.
    fn finish(&self, actions: Vec<Action>) -> Vec<Action> {
        if actions.iter().any(|a| matches!(a, Action::HistoryChanged)) {
            storage::save(&self.core.history);
        }
        actions
    }

    // ── Delegated commands ──────────────────────────────────────

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.core.set_stroke_width(width);
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.core.set_font_size(size);
    }

    pub fn undo(&mut self) -> Vec<Action> {
        let actions = self.core.undo();
        self.finish(actions)
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let actions = self.core.redo();
        self.finish(actions)
    }

    pub fn clear(&mut self) -> Vec<Action> {
        let actions = self.core.clear();
        self.finish(actions)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        self.core.set_zoom(zoom)
    }

    pub fn reset_zoom(&mut self) -> Vec<Action> {
        self.core.reset_zoom()
    }

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        let actions = self.core.on_pointer_down(screen, button);
        self.finish(actions)
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_move(screen);
        self.finish(actions)
    }

    pub fn on_pointer_up(&mut self, screen: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_up(screen);
        self.finish(actions)
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(delta, modifiers)
    }

    /// Commit text from the host editor, measuring it with the element's
    /// font size on the canvas context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas context cannot be acquired or the
    /// measurement call fails.
    pub fn commit_text(&mut self, text: &str) -> Result<Vec<Action>, JsValue> {
        let font_size = self
            .core
            .writing_index()
            .and_then(|index| self.core.history.current().get(index))
            .and_then(|element| match element {
                Element::Text { font_size, .. } => Some(*font_size),
                _ => None,
            })
            .unwrap_or(self.core.ui.font_size);

        let ctx = self.context()?;
        ctx.set_font(&format!("{font_size}px sans-serif"));
        let width = ctx.measure_text(text)?.width();
        let actions = self.core.commit_text(text, width);
        Ok(self.finish(actions))
    }

    /// Draw the current scene.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any Canvas2D call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        render::draw(
            &ctx,
            self.core.history.current(),
            &self.core.camera,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.writing_index(),
        )
    }
}
