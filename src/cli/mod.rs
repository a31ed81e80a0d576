//! CLI argument parsing for juryboard
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --store, --format, --quiet, --verbose, --pin

pub mod args;
pub mod draw;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BoardArgs, ExportArgs, InitArgs, NamesArgs, RowArgs, ScoreArgs};
pub use draw::DrawCommands;
pub use output::OutputFormat;

/// Juryboard - hackathon jury scoring board
#[derive(Parser, Debug)]
#[command(name = "juryboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true, env = "JURYBOARD_STORE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "juryboard_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Admin PIN for commands that change the board
    #[arg(long, global = true, env = "JURYBOARD_PIN", hide_env_values = true)]
    pub pin: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new juryboard store with the default board
    Init(InitArgs),

    /// Set one score (admin)
    Score(ScoreArgs),

    /// Set all scores of one team, in criteria order (admin)
    Row(RowArgs),

    /// Replace team and criterion names, keeping surviving scores (admin)
    Names(NamesArgs),

    /// Reset the board to default names and zero scores (admin)
    Reset,

    /// Jury view: score grid and ranked preview
    Show,

    /// Public screen: averages, team profiles, totals, winners
    Board(BoardArgs),

    /// Write the ranked table to a CSV or JSON file
    Export(ExportArgs),

    /// Commit-reveal draw for presentation order
    Draw {
        #[command(subcommand)]
        command: DrawCommands,
    },
}

impl Commands {
    /// Whether the command changes the board and needs the admin PIN
    pub fn requires_pin(&self) -> bool {
        match self {
            Commands::Score(_) | Commands::Row(_) | Commands::Names(_) | Commands::Reset => true,
            Commands::Draw { command } => command.requires_pin(),
            Commands::Init(_) | Commands::Show | Commands::Board(_) | Commands::Export(_) => false,
        }
    }
}
