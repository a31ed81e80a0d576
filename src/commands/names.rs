//! `juryboard names` - edit team and criterion names
//!
//! Each side is replaced only when given; scores survive for pairs whose
//! names are unchanged.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::{Cli, NamesArgs, OutputFormat};
use crate::commands::format::print_json_status;
use juryboard_core::bail_usage;
use juryboard_core::board::parse_names;
use juryboard_core::error::{JuryError, Result};
use juryboard_core::labels::{self, Label};
use juryboard_core::records::escape_quotes;
use juryboard_core::store::Store;

fn read_names_file(path: &Path) -> Result<Vec<String>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| JuryError::io_operation("read", path.display(), e))?
    };
    Ok(parse_names(&content))
}

fn resolve_side(
    listed: &[String],
    file: Option<&Path>,
    current: &[String],
) -> Result<Vec<String>> {
    if let Some(path) = file {
        read_names_file(path)
    } else if !listed.is_empty() {
        Ok(listed.to_vec())
    } else {
        Ok(current.to_vec())
    }
}

/// Execute the names command
pub fn execute(cli: &Cli, store: &Store, args: &NamesArgs) -> Result<()> {
    if args.teams.is_empty()
        && args.criteria.is_empty()
        && args.teams_file.is_none()
        && args.criteria_file.is_none()
    {
        bail_usage!("nothing to change: pass --team/--teams-file and/or --criterion/--criteria-file");
    }

    let stdin = Path::new("-");
    if args.teams_file.as_deref() == Some(stdin) && args.criteria_file.as_deref() == Some(stdin) {
        bail_usage!("stdin can feed only one of --teams-file and --criteria-file");
    }

    let state = store.update_state(|state| {
        let teams = resolve_side(&args.teams, args.teams_file.as_deref(), &state.teams)?;
        let criteria = resolve_side(
            &args.criteria,
            args.criteria_file.as_deref(),
            &state.criteria,
        )?;
        state.rename(teams, criteria, store.config())
    })?;

    tracing::info!(
        teams = state.teams.len(),
        criteria = state.criteria.len(),
        "names_saved"
    );

    match cli.format {
        OutputFormat::Json => print_json_status(
            "ok",
            None,
            &[
                ("teams", serde_json::json!(state.teams)),
                ("criteria", serde_json::json!(state.criteria)),
                ("updated_at", serde_json::json!(state.updated_at)),
            ],
        )?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", labels::text(store.config().language, Label::Saved));
                println!("Teams: {}", state.teams.join(", "));
                println!("Criteria: {}", state.criteria.join(", "));
            }
        }
        OutputFormat::Records => {
            for team in &state.teams {
                println!("N kind=team name=\"{}\"", escape_quotes(team));
            }
            for criterion in &state.criteria {
                println!("N kind=criterion name=\"{}\"", escape_quotes(criterion));
            }
        }
    }
    Ok(())
}
