//! Reading and writing the board state file

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::Local;

use crate::board::BoardState;
use crate::error::{JuryError, Result};
use crate::trace_time;

use super::paths::{STATE_FILE, STATE_TMP_FILE};

/// Timestamp format used for `updated_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in the board timestamp format
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Outcome of reading the state file
#[derive(Debug)]
pub(crate) enum ReadOutcome {
    Loaded(BoardState),
    Missing,
    Corrupt(String),
}

pub(crate) fn read_state(store_root: &Path) -> Result<ReadOutcome> {
    let start = Instant::now();
    let path = store_root.join(STATE_FILE);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ReadOutcome::Missing),
        Err(e) => return Err(JuryError::io_operation("read", path.display(), e)),
    };

    let outcome = match serde_json::from_str::<BoardState>(&content) {
        Ok(mut state) => {
            state.normalize().map_err(|e| JuryError::InvalidStore {
                reason: format!("{}: {}", path.display(), e),
            })?;
            ReadOutcome::Loaded(state)
        }
        Err(e) => ReadOutcome::Corrupt(e.to_string()),
    };

    trace_time!(start, "read_state");
    Ok(outcome)
}

/// Stamp `updated_at` and replace the state file atomically.
pub(crate) fn write_state(store_root: &Path, state: &mut BoardState) -> Result<()> {
    let start = Instant::now();
    state.updated_at = Some(now_stamp());

    let mut content = serde_json::to_string_pretty(state)?;
    content.push('\n');

    let tmp = store_root.join(STATE_TMP_FILE);
    let path = store_root.join(STATE_FILE);
    fs::write(&tmp, content).map_err(|e| JuryError::io_operation("write", tmp.display(), e))?;
    fs::rename(&tmp, &path).map_err(|e| JuryError::io_operation("replace", path.display(), e))?;

    trace_time!(start, "write_state", teams = state.teams.len());
    Ok(())
}
