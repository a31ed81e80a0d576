//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::labels::Language;

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Highest score a judge may give for one criterion
pub const DEFAULT_MAX_SCORE: u8 = 2;

/// Number of teams the board expects
pub const DEFAULT_TEAM_COUNT: usize = 7;

/// Number of criteria the board expects
pub const DEFAULT_CRITERIA_COUNT: usize = 5;

/// Number of places announced on the screen
pub const DEFAULT_PODIUM_SIZE: usize = 3;

/// Board configuration, stored as `config.toml` in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Maximum score per criterion (scores run `0..=max_score`)
    #[serde(default = "default_max_score")]
    pub max_score: u8,

    /// Required number of teams when renaming; 0 accepts any count
    #[serde(default = "default_team_count")]
    pub team_count: usize,

    /// Required number of criteria when renaming; 0 accepts any count
    #[serde(default = "default_criteria_count")]
    pub criteria_count: usize,

    /// Places shown in the winners block
    #[serde(default = "default_podium_size")]
    pub podium_size: usize,

    /// Label language for human output
    #[serde(default)]
    pub language: Language,

    /// Admin PIN guarding mutating commands (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_pin: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            max_score: DEFAULT_MAX_SCORE,
            team_count: DEFAULT_TEAM_COUNT,
            criteria_count: DEFAULT_CRITERIA_COUNT,
            podium_size: DEFAULT_PODIUM_SIZE,
            language: Language::default(),
            admin_pin: None,
        }
    }
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_max_score() -> u8 {
    DEFAULT_MAX_SCORE
}

fn default_team_count() -> usize {
    DEFAULT_TEAM_COUNT
}

fn default_criteria_count() -> usize {
    DEFAULT_CRITERIA_COUNT
}

fn default_podium_size() -> usize {
    DEFAULT_PODIUM_SIZE
}
