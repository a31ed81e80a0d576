//! `juryboard show` - jury view
//!
//! Score grid in team order, followed by the ranked preview as the screen
//! will show it.

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_ranked_table, print_records_header, print_standing_records};
use juryboard_core::board::BoardState;
use juryboard_core::error::Result;
use juryboard_core::labels::{self, Label, Language};
use juryboard_core::ranking::{compute_standings, Standing};
use juryboard_core::records::escape_quotes;
use juryboard_core::store::Store;

/// Execute the show command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let state = store.load_state()?;
    let standings = compute_standings(&state);
    let language = store.config().language;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "updated_at": state.updated_at,
                "max_score": store.config().max_score,
                "teams": state.teams,
                "criteria": state.criteria,
                "scores": state.scores,
                "standings": standings,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(&state, &standings, language, store.config().max_score),
        OutputFormat::Records => {
            print_records_header("jury", &state);
            for team in &state.teams {
                for criterion in &state.criteria {
                    println!(
                        "C team=\"{}\" criterion=\"{}\" value={}",
                        escape_quotes(team),
                        escape_quotes(criterion),
                        state.score(team, criterion)
                    );
                }
            }
            print_standing_records(&standings);
        }
    }
    Ok(())
}

fn print_human(state: &BoardState, standings: &[Standing], language: Language, max_score: u8) {
    println!("{}", labels::text(language, Label::JuryPanel));
    println!(
        "{}: {}",
        labels::text(language, Label::UpdatedAt),
        state.updated_at.as_deref().unwrap_or("-")
    );
    println!();

    println!(
        "{} (0-{})",
        labels::text(language, Label::ScoreEntry),
        max_score
    );
    // Grid in entry order; the first column numbers the rows
    let grid_rows: Vec<Standing> = state
        .teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let scores = state.team_scores(team);
            Standing {
                rank: i + 1,
                team: team.clone(),
                total: scores.iter().map(|s| u32::from(*s)).sum(),
                scores,
            }
        })
        .collect();
    print_ranked_table(&state.criteria, &grid_rows);
    println!();

    println!("{}", labels::text(language, Label::Preview));
    print_ranked_table(&state.criteria, standings);
}
