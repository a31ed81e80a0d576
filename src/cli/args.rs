use std::path::PathBuf;

use clap::Args;
use juryboard_core::export::ExportFormat;
use juryboard_core::labels::Language;

use super::parse::{parse_export_format, parse_language, parse_max_score};

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Use visible store directory (juryboard/ instead of .juryboard/)
    #[arg(long)]
    pub visible: bool,

    /// Label language for a new store (en, kk-ru)
    #[arg(long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Maximum score per criterion for a new store
    #[arg(long, value_parser = parse_max_score)]
    pub max_score: Option<u8>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Team name
    pub team: String,

    /// Criterion name
    pub criterion: String,

    /// Score (0 up to the configured maximum)
    pub value: u32,
}

#[derive(Args, Debug, Clone)]
pub struct RowArgs {
    /// Team name
    pub team: String,

    /// One score per criterion, in criteria order
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct NamesArgs {
    /// Team name (repeat in order; replaces all teams)
    #[arg(long = "team", action = clap::ArgAction::Append, conflicts_with = "teams_file")]
    pub teams: Vec<String>,

    /// Criterion name (repeat in order; replaces all criteria)
    #[arg(long = "criterion", action = clap::ArgAction::Append, conflicts_with = "criteria_file")]
    pub criteria: Vec<String>,

    /// File with one team per line ("-" for stdin)
    #[arg(long)]
    pub teams_file: Option<PathBuf>,

    /// File with one criterion per line ("-" for stdin)
    #[arg(long)]
    pub criteria_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Re-render every N seconds until interrupted
    #[arg(long, value_name = "SECS")]
    pub watch: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file
    #[arg(long, default_value = "scores-export.csv")]
    pub to: PathBuf,

    /// File format (csv, json); defaults from the file extension
    #[arg(long, value_parser = parse_export_format)]
    pub export_format: Option<ExportFormat>,
}
