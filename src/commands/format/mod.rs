//! Shared output formatting helpers for commands
//!
//! Provides common patterns for JSON status messages, records headers,
//! and the ranked tables shared by the jury and screen views.

pub mod status;
pub mod table;

pub use status::{print_json_status, print_records_header};
pub use table::{print_ranked_table, print_standing_records};
