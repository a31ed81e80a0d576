//! `juryboard reset` - back to default names and zero scores

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json_status;
use juryboard_core::error::Result;
use juryboard_core::labels::{self, Label};
use juryboard_core::store::Store;

/// Execute the reset command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let state = store.reset()?;
    tracing::info!("board_reset");

    match cli.format {
        OutputFormat::Json => print_json_status(
            "ok",
            Some("Board reset"),
            &[
                ("teams", serde_json::json!(state.teams.len())),
                ("criteria", serde_json::json!(state.criteria.len())),
                ("updated_at", serde_json::json!(state.updated_at)),
            ],
        )?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", labels::text(store.config().language, Label::ResetDone));
            }
        }
        OutputFormat::Records => println!("R status=reset teams={}", state.teams.len()),
    }
    Ok(())
}
