//! Command dispatch logic for juryboard

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use juryboard_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
