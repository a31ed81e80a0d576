//! Store management for juryboard
//!
//! The store is the directory holding the board config and the state file.
//! Default location: `.juryboard/` (hidden, git-trackable)

pub mod config;
pub mod io;
pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use crate::board::BoardState;
use crate::config::BoardConfig;
use crate::error::{JuryError, Result};
pub use config::InitOptions;
use io::ReadOutcome;
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR, STATE_FILE, VISIBLE_STORE_DIR};

/// The juryboard store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Board configuration
    config: BoardConfig,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(JuryError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            BoardConfig::load(&config_path)?
        } else {
            BoardConfig::default()
        };

        Ok(Store {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path, options: InitOptions) -> Result<Self> {
        let store_name = if options.visible {
            VISIBLE_STORE_DIR
        } else {
            DEFAULT_STORE_DIR
        };

        Self::init_at(&project_root.join(store_name), options)
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Idempotent: an existing config and state are left untouched.
    #[tracing::instrument(skip(store_root, options), fields(path = %store_root.display()))]
    pub fn init_at(store_root: &Path, options: InitOptions) -> Result<Self> {
        fs::create_dir_all(store_root)?;

        let config_path = store_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            BoardConfig::load(&config_path)?
        } else {
            let mut config = BoardConfig::default();
            if let Some(language) = options.language {
                config.language = language;
            }
            if let Some(max_score) = options.max_score {
                if max_score == 0 {
                    return Err(JuryError::invalid_value("max_score", 0));
                }
                config.max_score = max_score;
            }
            config.save(&config_path)?;
            config
        };

        let store = Store {
            root: store_root.to_path_buf(),
            config,
        };

        if !store.state_path().exists() {
            store.save_state(&mut BoardState::default())?;
            tracing::info!("created default board");
        }

        Ok(store)
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the store configuration
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Path of the board state file
    pub fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILE)
    }

    /// Load the board.
    ///
    /// A missing or unparseable state file is replaced by the default board.
    pub fn load_state(&self) -> Result<BoardState> {
        match io::read_state(&self.root)? {
            ReadOutcome::Loaded(state) => {
                let max = self.config.max_score;
                let over = state.cells_above(max);
                if over > 0 {
                    tracing::warn!(cells = over, max_score = max, "scores above max_score on board");
                }
                Ok(state)
            }
            ReadOutcome::Missing => {
                tracing::info!("state file missing, creating default board");
                self.reset()
            }
            ReadOutcome::Corrupt(reason) => {
                tracing::warn!(%reason, "state file unreadable, resetting to default board");
                self.reset()
            }
        }
    }

    /// Save the board, stamping `updated_at`
    pub fn save_state(&self, state: &mut BoardState) -> Result<()> {
        io::write_state(&self.root, state)
    }

    /// Replace the board with the default board and save it
    pub fn reset(&self) -> Result<BoardState> {
        let mut state = BoardState::default();
        self.save_state(&mut state)?;
        Ok(state)
    }

    /// Load, apply `f`, and save only if `f` succeeds. Returns the saved board.
    pub fn update_state(&self, f: impl FnOnce(&mut BoardState) -> Result<()>) -> Result<BoardState> {
        let mut state = self.load_state()?;
        f(&mut state)?;
        self.save_state(&mut state)?;
        Ok(state)
    }
}
