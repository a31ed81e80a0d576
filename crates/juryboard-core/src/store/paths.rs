use crate::error::{JuryError, Result};
use std::path::{Path, PathBuf};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".juryboard";

/// Visible store directory name
pub const VISIBLE_STORE_DIR: &str = "juryboard";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Board state filename
pub const STATE_FILE: &str = "scores.json";

/// Temporary file the state is written to before the atomic rename
pub const STATE_TMP_FILE: &str = "scores.json.tmp";

pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        let visible_path = current.join(VISIBLE_STORE_DIR);
        if visible_path.is_dir() {
            return Ok(visible_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(JuryError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
