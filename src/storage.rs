//! Persistence: the history store in browser `localStorage`.
//!
//! Two fixed keys hold the serialized snapshot list and the cursor as
//! separate records. Saves happen on every history change; loads happen
//! once at engine construction. Any failure on the read path, a missing
//! storage area, absent keys, unparseable JSON, an out-of-range cursor,
//! falls back to a fresh single-snapshot history and is logged, never
//! surfaced to the user.

use web_sys::Storage;

use crate::doc::Scene;
use crate::history::History;

const HISTORY_KEY: &str = "sketchboard_history";
const CURSOR_KEY: &str = "sketchboard_cursor";

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        Some(storage)
    } else {
        None
    }
}

fn read_key(storage: &Storage, key: &str) -> Option<String> {
    if let Ok(Some(value)) = storage.get_item(key) {
        Some(value)
    } else {
        None
    }
}

/// Load the persisted history, falling back to a fresh one when nothing
/// usable is stored.
#[must_use]
pub fn load() -> History {
    let Some(storage) = local_storage() else {
        return History::new();
    };
    let (Some(raw_history), Some(raw_cursor)) =
        (read_key(&storage, HISTORY_KEY), read_key(&storage, CURSOR_KEY))
    else {
        return History::new();
    };
    match parse(&raw_history, &raw_cursor) {
        Some(mut history) => {
            history.refresh_sketches();
            history
        }
        None => History::new(),
    }
}

fn parse(raw_history: &str, raw_cursor: &str) -> Option<History> {
    let snapshots: Vec<Scene> = match serde_json::from_str(raw_history) {
        Ok(snapshots) => snapshots,
        Err(err) => {
            log::warn!("stored history is unreadable, starting fresh: {err}");
            return None;
        }
    };
    let cursor: usize = match serde_json::from_str(raw_cursor) {
        Ok(cursor) => cursor,
        Err(err) => {
            log::warn!("stored history cursor is unreadable, starting fresh: {err}");
            return None;
        }
    };
    let history = History::from_parts(snapshots, cursor);
    if history.is_none() {
        log::warn!("stored history violates its invariants, starting fresh");
    }
    history
}

/// Persist the history. Write failures are logged and otherwise ignored;
/// the in-memory state stays authoritative.
pub fn save(history: &History) {
    let Some(storage) = local_storage() else {
        return;
    };
    let snapshots = match serde_json::to_string(history.snapshots()) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("failed to serialize history: {err}");
            return;
        }
    };
    let cursor = history.cursor().to_string();
    if let Err(err) = storage.set_item(HISTORY_KEY, &snapshots) {
        log::warn!("failed to persist history: {err:?}");
        return;
    }
    if let Err(err) = storage.set_item(CURSOR_KEY, &cursor) {
        log::warn!("failed to persist history cursor: {err:?}");
    }
}
