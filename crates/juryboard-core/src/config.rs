//! Board configuration for juryboard
//!
//! Configuration is stored in `.juryboard/config.toml`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{JuryError, Result};

pub use types::{
    BoardConfig, DEFAULT_CRITERIA_COUNT, DEFAULT_MAX_SCORE, DEFAULT_PODIUM_SIZE,
    DEFAULT_TEAM_COUNT, STORE_FORMAT_VERSION,
};

/// Environment variable that overrides the configured admin PIN
pub const ADMIN_PIN_ENV: &str = "JURYBOARD_ADMIN_PIN";

impl BoardConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BoardConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(JuryError::InvalidStore {
                reason: format!(
                    "config version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }
        if config.max_score == 0 {
            return Err(JuryError::invalid_value("max_score", 0));
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| JuryError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The admin PIN in effect: the environment override, else the config value.
    /// Blank values count as unset.
    pub fn effective_admin_pin(&self) -> Option<String> {
        resolve_admin_pin(std::env::var(ADMIN_PIN_ENV).ok(), self.admin_pin.as_deref())
    }

    /// Check a supplied PIN against `expected`.
    pub fn check_pin(expected: Option<&str>, supplied: Option<&str>) -> Result<()> {
        match (expected, supplied) {
            (None, _) => Ok(()),
            (Some(_), None) => Err(JuryError::PinRequired),
            (Some(expected), Some(supplied)) if expected == supplied => Ok(()),
            (Some(_), Some(_)) => Err(JuryError::WrongPin),
        }
    }
}

fn non_blank(pin: String) -> Option<String> {
    if pin.trim().is_empty() {
        None
    } else {
        Some(pin)
    }
}

/// A blank environment value falls through to the configured PIN.
fn resolve_admin_pin(from_env: Option<String>, configured: Option<&str>) -> Option<String> {
    from_env
        .and_then(non_blank)
        .or_else(|| configured.map(str::to_string).and_then(non_blank))
}
