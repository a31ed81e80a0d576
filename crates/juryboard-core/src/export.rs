//! Export of the ranked table
//!
//! CSV follows RFC 4180 quoting and starts with a UTF-8 byte order mark so
//! spreadsheet software opens Cyrillic names correctly. JSON is the same
//! document `board --format json` prints.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::board::BoardState;
use crate::config::BoardConfig;
use crate::error::{JuryError, Result};
use crate::ranking::{compute_standings, criterion_averages, podium, Standing};

/// UTF-8 byte order mark written at the start of CSV exports
pub const UTF8_BOM: char = '\u{FEFF}';

/// File format for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = JuryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(JuryError::invalid_value("export format", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the standings as CSV: Rank, Team, one column per criterion, Total
pub fn render_csv(criteria: &[String], standings: &[Standing]) -> String {
    let mut header = vec!["Rank".to_string(), "Team".to_string()];
    header.extend(criteria.iter().cloned());
    header.push("Total".to_string());

    let mut out = String::new();
    out.push(UTF8_BOM);
    out.push_str(&csv_line(&header));
    out.push_str("\r\n");
    for row in standings {
        let mut fields = vec![row.rank.to_string(), row.team.clone()];
        fields.extend(row.scores.iter().map(|s| s.to_string()));
        fields.push(row.total.to_string());
        out.push_str(&csv_line(&fields));
        out.push_str("\r\n");
    }
    out
}

/// Build the JSON document shared by `export` and `board --format json`
pub fn board_json(state: &BoardState, config: &BoardConfig) -> serde_json::Value {
    let standings = compute_standings(state);
    serde_json::json!({
        "updated_at": state.updated_at,
        "max_score": config.max_score,
        "criteria": state.criteria,
        "standings": standings,
        "averages": criterion_averages(state),
        "podium": podium(&standings, config.podium_size),
    })
}

/// Write the ranked table of `state` to `path`
pub fn export_to(
    state: &BoardState,
    config: &BoardConfig,
    path: &Path,
    format: ExportFormat,
) -> Result<usize> {
    let standings = compute_standings(state);
    let content = match format {
        ExportFormat::Csv => render_csv(&state.criteria, &standings),
        ExportFormat::Json => {
            let mut s = serde_json::to_string_pretty(&board_json(state, config))?;
            s.push('\n');
            s
        }
    };

    fs::write(path, content)
        .map_err(|e| JuryError::io_operation("write export", path.display(), e))?;
    tracing::info!(path = %path.display(), rows = standings.len(), %format, "export_written");
    Ok(standings.len())
}
