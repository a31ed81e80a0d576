//! Error types and exit codes for juryboard
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range scores)
//! - 3: Data/store error (missing store, unknown team, draw mismatch)
//! - 4: Permission error (admin PIN required or wrong)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, unknown team (3)
    Data = 3,
    /// Permission error - admin PIN missing or wrong (4)
    Permission = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during juryboard operations
#[derive(Error, Debug)]
pub enum JuryError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("score {value} for {team} / {criterion} is out of range (0..={max})")]
    ScoreOutOfRange {
        team: String,
        criterion: String,
        value: u32,
        max: u8,
    },

    #[error("expected {expected} {what}, got {actual}")]
    WrongCount {
        what: String,
        expected: usize,
        actual: usize,
    },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("draw commitment does not match the revealed secret")]
    CommitmentMismatch,

    // Permission errors (exit code 4)
    #[error("admin PIN required (pass --pin or set JURYBOARD_PIN)")]
    PinRequired,

    #[error("wrong admin PIN")]
    WrongPin,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl JuryError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        JuryError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        JuryError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        JuryError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        JuryError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            JuryError::UnknownFormat(_)
            | JuryError::DuplicateFormat
            | JuryError::UsageError(_)
            | JuryError::ScoreOutOfRange { .. }
            | JuryError::WrongCount { .. }
            | JuryError::InvalidValue { .. } => ExitCode::Usage,

            JuryError::StoreNotFound { .. }
            | JuryError::InvalidStore { .. }
            | JuryError::CommitmentMismatch
            | JuryError::NotFound { .. }
            | JuryError::AlreadyExists { .. } => ExitCode::Data,

            JuryError::PinRequired | JuryError::WrongPin => ExitCode::Permission,

            JuryError::Io(_)
            | JuryError::Json(_)
            | JuryError::Toml(_)
            | JuryError::FailedOperationWithTarget { .. }
            | JuryError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            JuryError::UnknownFormat(_) => "unknown_format",
            JuryError::DuplicateFormat => "duplicate_format",
            JuryError::UsageError(_) => "usage_error",
            JuryError::ScoreOutOfRange { .. } => "score_out_of_range",
            JuryError::WrongCount { .. } => "wrong_count",
            JuryError::StoreNotFound { .. } => "store_not_found",
            JuryError::InvalidStore { .. } => "invalid_store",
            JuryError::CommitmentMismatch => "commitment_mismatch",
            JuryError::PinRequired => "pin_required",
            JuryError::WrongPin => "wrong_pin",
            JuryError::Io(_) => "io_error",
            JuryError::Json(_) => "json_error",
            JuryError::Toml(_) => "toml_error",
            JuryError::InvalidValue { .. } => "invalid_value",
            JuryError::AlreadyExists { .. } => "already_exists",
            JuryError::NotFound { .. } => "not_found",
            JuryError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            JuryError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for juryboard operations
pub type Result<T> = std::result::Result<T, JuryError>;
