//! `juryboard score` and `juryboard row` - enter scores

use crate::cli::{Cli, OutputFormat, RowArgs, ScoreArgs};
use crate::commands::format::print_json_status;
use juryboard_core::error::Result;
use juryboard_core::records::escape_quotes;
use juryboard_core::store::Store;

/// Set one cell
pub fn execute_score(cli: &Cli, store: &Store, args: &ScoreArgs) -> Result<()> {
    let max = store.config().max_score;
    let state = store.update_state(|state| {
        state.set_score(&args.team, &args.criterion, args.value, max)
    })?;
    let total: u32 = state
        .team_scores(&args.team)
        .iter()
        .map(|s| u32::from(*s))
        .sum();

    tracing::info!(
        team = %args.team,
        criterion = %args.criterion,
        value = args.value,
        "score_set"
    );

    match cli.format {
        OutputFormat::Json => print_json_status(
            "ok",
            None,
            &[
                ("team", serde_json::json!(args.team)),
                ("criterion", serde_json::json!(args.criterion)),
                ("value", serde_json::json!(args.value)),
                ("total", serde_json::json!(total)),
                ("updated_at", serde_json::json!(state.updated_at)),
            ],
        )?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} / {} = {} (total {})",
                    args.team, args.criterion, args.value, total
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "S team=\"{}\" criterion=\"{}\" value={} total={}",
                escape_quotes(&args.team),
                escape_quotes(&args.criterion),
                args.value,
                total
            );
        }
    }
    Ok(())
}

/// Set a whole row
pub fn execute_row(cli: &Cli, store: &Store, args: &RowArgs) -> Result<()> {
    let max = store.config().max_score;
    let state = store.update_state(|state| {
        state.set_row(&args.team, &args.values, max)
    })?;
    let total: u32 = args.values.iter().sum();

    tracing::info!(team = %args.team, total, "row_set");

    match cli.format {
        OutputFormat::Json => {
            let scores: serde_json::Map<String, serde_json::Value> = state
                .criteria
                .iter()
                .map(|c| (c.clone(), serde_json::json!(state.score(&args.team, c))))
                .collect();
            print_json_status(
                "ok",
                None,
                &[
                    ("team", serde_json::json!(args.team)),
                    ("scores", serde_json::Value::Object(scores)),
                    ("total", serde_json::json!(total)),
                    ("updated_at", serde_json::json!(state.updated_at)),
                ],
            )?
        }
        OutputFormat::Human => {
            if !cli.quiet {
                for criterion in &state.criteria {
                    println!("{} / {} = {}", args.team, criterion, state.score(&args.team, criterion));
                }
                println!("Total: {}", total);
            }
        }
        OutputFormat::Records => {
            for criterion in &state.criteria {
                println!(
                    "S team=\"{}\" criterion=\"{}\" value={}",
                    escape_quotes(&args.team),
                    escape_quotes(criterion),
                    state.score(&args.team, criterion)
                );
            }
        }
    }
    Ok(())
}
