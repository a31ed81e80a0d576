//! Store initialization options

use crate::labels::Language;

/// Options for initializing a new store
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Use visible store directory (juryboard/ instead of .juryboard/)
    pub visible: bool,
    /// Label language written to a new config
    pub language: Option<Language>,
    /// Maximum score per criterion written to a new config
    pub max_score: Option<u8>,
}
