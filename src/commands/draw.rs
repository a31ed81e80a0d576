//! `juryboard draw` - commit-reveal draw for presentation order
//!
//! `commit` publishes the hash of a secret, `reveal` publishes the secret and
//! fixes the order, `verify` lets anyone recompute it.

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json_status;
use juryboard_core::bail_usage;
use juryboard_core::draw::{self, DrawRecord};
use juryboard_core::error::{JuryError, Result};
use juryboard_core::labels::{self, Label, Language};
use juryboard_core::records::escape_quotes;
use juryboard_core::store::io::now_stamp;
use juryboard_core::store::Store;

fn print_order(language: Language, order: &[String]) {
    println!("{}:", labels::text(language, Label::DrawOrder));
    for (i, team) in order.iter().enumerate() {
        println!("  {}. {}", i + 1, team);
    }
}

fn print_order_records(order: &[String]) {
    for (i, team) in order.iter().enumerate() {
        println!("O slot={} team=\"{}\"", i + 1, escape_quotes(team));
    }
}

/// Store a new commitment
pub fn execute_commit(cli: &Cli, store: &Store, secret: Option<&str>, force: bool) -> Result<()> {
    let generated = secret.is_none();
    let secret = secret.map_or_else(draw::generate_secret, str::to_string);

    let state = store.update_state(|state| {
        if let Some(existing) = &state.draw {
            if existing.is_revealed() && !force {
                return Err(JuryError::already_exists(
                    "revealed draw",
                    "pass --force to start a new draw",
                ));
            }
        }
        state.draw = Some(DrawRecord::commit(&secret, &state.teams, now_stamp())?);
        Ok(())
    })?;
    let record = state
        .draw
        .as_ref()
        .ok_or_else(|| JuryError::Other("draw missing after commit".to_string()))?;

    tracing::info!(commitment = %record.commitment, teams = record.teams.len(), "draw_committed");

    match cli.format {
        OutputFormat::Json => {
            let mut fields = vec![
                ("commitment", serde_json::json!(record.commitment)),
                ("committed_at", serde_json::json!(record.committed_at)),
                ("teams", serde_json::json!(record.teams)),
            ];
            if generated {
                fields.push(("secret", serde_json::json!(secret)));
            }
            print_json_status("committed", None, &fields)?
        }
        OutputFormat::Human => {
            println!("Commitment: {}", record.commitment);
            if generated {
                println!("Secret (keep private until reveal): {}", secret);
            }
            if !cli.quiet {
                println!("Teams in draw: {}", record.teams.join(", "));
            }
        }
        OutputFormat::Records => {
            println!("D commitment={} teams={}", record.commitment, record.teams.len());
            if generated {
                println!("D secret={}", secret);
            }
        }
    }
    Ok(())
}

/// Reveal the secret and store the order
pub fn execute_reveal(cli: &Cli, store: &Store, secret: &str) -> Result<()> {
    let state = store.update_state(|state| {
        let record = state
            .draw
            .as_mut()
            .ok_or_else(|| JuryError::not_found("draw commitment", "run `juryboard draw commit` first"))?;
        record.reveal(secret, now_stamp())?;
        Ok(())
    })?;

    let record = state
        .draw
        .as_ref()
        .ok_or_else(|| JuryError::Other("draw missing after reveal".to_string()))?;
    let order = record
        .reveal
        .as_ref()
        .map(|r| r.order.clone())
        .unwrap_or_default();

    if record.teams != state.teams {
        tracing::warn!("teams changed since commit; order uses the committed team list");
    }
    tracing::info!(commitment = %record.commitment, "draw_revealed");

    match cli.format {
        OutputFormat::Json => print_json_status(
            "revealed",
            None,
            &[
                ("commitment", serde_json::json!(record.commitment)),
                ("secret", serde_json::json!(secret.trim().to_lowercase())),
                ("order", serde_json::json!(order)),
            ],
        )?,
        OutputFormat::Human => print_order(store.config().language, &order),
        OutputFormat::Records => print_order_records(&order),
    }
    Ok(())
}

/// Check a secret without changing the board
pub fn execute_verify(
    cli: &Cli,
    store: &Store,
    secret: &str,
    commitment: Option<&str>,
) -> Result<()> {
    let state = store.load_state()?;
    let stored = state.draw.as_ref();

    let commitment = match (commitment, stored) {
        (Some(c), _) => c.to_string(),
        (None, Some(record)) => record.commitment.clone(),
        (None, None) => bail_usage!("no stored draw; pass --commitment"),
    };
    let teams = stored.map_or(&state.teams, |r| &r.teams);
    let order = draw::verify(secret, &commitment, teams)?;

    match cli.format {
        OutputFormat::Json => print_json_status(
            "verified",
            None,
            &[
                ("commitment", serde_json::json!(commitment.to_lowercase())),
                ("order", serde_json::json!(order)),
            ],
        )?,
        OutputFormat::Human => {
            println!("Secret matches commitment {}", commitment.to_lowercase());
            print_order(store.config().language, &order);
        }
        OutputFormat::Records => {
            println!("V ok=true commitment={}", commitment.to_lowercase());
            print_order_records(&order);
        }
    }
    Ok(())
}

/// Show the stored draw
pub fn execute_show(cli: &Cli, store: &Store) -> Result<()> {
    let state = store.load_state()?;
    let language = store.config().language;

    match (cli.format, &state.draw) {
        (OutputFormat::Json, _) => {
            let output = serde_json::json!({ "draw": state.draw });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (OutputFormat::Human, None) => println!("No draw committed"),
        (OutputFormat::Human, Some(record)) => {
            println!("Commitment: {}", record.commitment);
            println!("Committed at: {}", record.committed_at);
            match &record.reveal {
                None => println!("Not revealed yet"),
                Some(reveal) => {
                    println!("Secret: {}", reveal.secret);
                    println!("Revealed at: {}", reveal.revealed_at);
                    print_order(language, &reveal.order);
                }
            }
        }
        (OutputFormat::Records, None) => {}
        (OutputFormat::Records, Some(record)) => {
            println!(
                "D commitment={} revealed={}",
                record.commitment,
                record.is_revealed()
            );
            if let Some(reveal) = &record.reveal {
                print_order_records(&reveal.order);
            }
        }
    }
    Ok(())
}
