//! `juryboard board` - public screen view
//!
//! Sections, in order:
//! 1. average score per criterion across all teams
//! 2. team profiles (per-criterion bars on the 0..max scale)
//! 3. totals in ranked order
//! 4. winners
//!
//! With `--watch` the view is redrawn until Ctrl-C.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::cli::{BoardArgs, Cli, OutputFormat};
use crate::commands::format::{print_records_header, print_standing_records};
use juryboard_core::bail_usage;
use juryboard_core::board::BoardState;
use juryboard_core::chart::{label_width, pad_label, text_bar};
use juryboard_core::config::BoardConfig;
use juryboard_core::error::{JuryError, Result};
use juryboard_core::export::board_json;
use juryboard_core::labels::{self, Label};
use juryboard_core::ranking::{compute_standings, criterion_averages, max_total, podium};
use juryboard_core::records::escape_quotes;
use juryboard_core::store::Store;

const BAR_WIDTH: usize = 20;

/// Execute the board command
pub fn execute(cli: &Cli, store: &Store, args: &BoardArgs) -> Result<()> {
    match args.watch {
        None => render(cli, store),
        Some(0) => bail_usage!("--watch interval must be at least 1 second"),
        Some(secs) => watch(cli, store, Duration::from_secs(secs)),
    }
}

fn watch(cli: &Cli, store: &Store, interval: Duration) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    })
    .map_err(|e| JuryError::Other(format!("failed to install Ctrl-C handler: {}", e)))?;

    let tick = Duration::from_millis(100);
    while !interrupted.load(Ordering::SeqCst) {
        if cli.format == OutputFormat::Human {
            // Clear screen, cursor home
            print!("\x1b[2J\x1b[H");
        }
        render(cli, store)?;

        let mut waited = Duration::ZERO;
        while waited < interval && !interrupted.load(Ordering::SeqCst) {
            thread::sleep(tick);
            waited += tick;
        }
    }

    tracing::debug!("watch stopped");
    Ok(())
}

fn render(cli: &Cli, store: &Store) -> Result<()> {
    let state = store.load_state()?;
    let config = store.config();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&board_json(&state, config))?);
        }
        OutputFormat::Human => print_human(&state, config),
        OutputFormat::Records => print_records(&state, config),
    }
    Ok(())
}

fn print_human(state: &BoardState, config: &BoardConfig) {
    let lang = config.language;
    let max = f64::from(config.max_score);
    let standings = compute_standings(state);

    println!("{}", labels::text(lang, Label::LiveResults));
    println!(
        "{}: {}",
        labels::text(lang, Label::UpdatedAt),
        state.updated_at.as_deref().unwrap_or("-")
    );

    println!();
    println!("{}", labels::text(lang, Label::CriterionAverages));
    let averages = criterion_averages(state);
    let width = label_width(averages.iter().map(|a| a.criterion.as_str()));
    for avg in &averages {
        println!(
            "  {}  {}  {:.2}",
            pad_label(&avg.criterion, width),
            text_bar(avg.average, max, BAR_WIDTH),
            avg.average
        );
    }

    println!();
    println!(
        "{} (0-{})",
        labels::text(lang, Label::TeamProfiles),
        config.max_score
    );
    let width = label_width(state.criteria.iter().map(String::as_str));
    for row in &standings {
        println!("  {}", row.team);
        for (criterion, score) in state.criteria.iter().zip(&row.scores) {
            println!(
                "    {}  {}  {}",
                pad_label(criterion, width),
                text_bar(f64::from(*score), max, config.max_score as usize * 4),
                score
            );
        }
    }

    println!();
    println!("{}", labels::text(lang, Label::Totals));
    let best = f64::from(max_total(state, config.max_score));
    let width = label_width(standings.iter().map(|s| s.team.as_str()));
    for row in &standings {
        println!(
            "  {:>2}. {}  {}  {}",
            row.rank,
            pad_label(&row.team, width),
            text_bar(f64::from(row.total), best, BAR_WIDTH),
            row.total
        );
    }

    println!();
    println!("{}", labels::text(lang, Label::Winners));
    for row in podium(&standings, config.podium_size) {
        println!(
            "  {}: {} ({}) - {}",
            labels::place(lang, row.rank),
            row.team,
            row.total,
            labels::text(lang, Label::Congratulations)
        );
    }

    println!();
    println!("{}", labels::text(lang, Label::ScreenFooter));
}

fn print_records(state: &BoardState, config: &BoardConfig) {
    let standings = compute_standings(state);
    print_records_header("screen", state);
    for avg in criterion_averages(state) {
        println!(
            "A criterion=\"{}\" average={:.2}",
            escape_quotes(&avg.criterion),
            avg.average
        );
    }
    print_standing_records(&standings);
    for row in podium(&standings, config.podium_size) {
        println!(
            "W place={} team=\"{}\" total={}",
            row.rank,
            escape_quotes(&row.team),
            row.total
        );
    }
}
