//! Linear undo/redo history: a list of scene snapshots plus a cursor.
//!
//! Two write paths with different costs: [`History::commit`] records a new
//! snapshot (discrete actions, one undo step each), while
//! [`History::overwrite`] replaces the current snapshot in place
//! (continuous in-gesture updates, so a drag is one undo step rather than
//! hundreds). The first snapshot is the empty initial scene and is never
//! removed.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::doc::Scene;

/// Versioned snapshot store with a cursor into the snapshot list.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Scene>,
    cursor: usize,
}

impl History {
    /// A fresh history holding a single empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { snapshots: vec![Scene::new()], cursor: 0 }
    }

    /// Rebuild a history from persisted parts, validating the invariants:
    /// at least one snapshot, cursor in range. Returns `None` for data
    /// that cannot hold them, letting the caller fall back to a fresh
    /// history.
    #[must_use]
    pub fn from_parts(snapshots: Vec<Scene>, cursor: usize) -> Option<Self> {
        if snapshots.is_empty() || cursor >= snapshots.len() {
            return None;
        }
        Some(Self { snapshots, cursor })
    }

    /// The scene the cursor points at.
    #[must_use]
    pub fn current(&self) -> &Scene {
        &self.snapshots[self.cursor]
    }

    /// Record `scene` as a new snapshot after the cursor, discarding any
    /// redoable snapshots beyond it, and advance the cursor.
    pub fn commit(&mut self, scene: Scene) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(scene);
        self.cursor += 1;
    }

    /// Replace the current snapshot in place. Cursor and snapshot count
    /// are unchanged.
    pub fn overwrite(&mut self, scene: Scene) {
        self.snapshots[self.cursor] = scene;
    }

    /// Step the cursor back one snapshot. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward one snapshot. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Rewind the cursor to the initial empty scene. Snapshots are kept,
    /// so redo can walk back through the cleared history.
    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if only the initial empty snapshot exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.len() == 1
    }

    /// All snapshots, oldest first. Used by the persistence layer.
    #[must_use]
    pub fn snapshots(&self) -> &[Scene] {
        &self.snapshots
    }

    /// Rebuild the render caches of every element in every snapshot.
    /// Needed after deserialization, since sketches are not persisted.
    pub fn refresh_sketches(&mut self) {
        for scene in &mut self.snapshots {
            for element in scene {
                element.refresh_sketch();
            }
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
