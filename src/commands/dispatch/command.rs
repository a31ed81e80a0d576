//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use juryboard_core::config::BoardConfig;
use juryboard_core::error::Result;
use juryboard_core::store::Store;

use super::trace_command;

/// Discover or open a store based on CLI configuration
pub fn discover_or_open_store(cli: &Cli, root: &PathBuf) -> Result<Store> {
    if let Some(path) = &cli.store {
        Store::open(&resolve_against(root, path))
    } else {
        Store::discover(root)
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_store(&self) -> Result<Store> {
        let store = discover_or_open_store(self.cli, self.root)?;
        trace_command!(self.cli, self.start, "discover_store");
        Ok(store)
    }

    /// Open the store for a command that changes the board, checking the admin PIN
    pub fn open_admin_store(&self) -> Result<Store> {
        let store = self.discover_or_open_store()?;
        let expected = store.config().effective_admin_pin();
        BoardConfig::check_pin(expected.as_deref(), self.cli.pin.as_deref())?;
        Ok(store)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("juryboard {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Jury scoring board for hackathons.");
        println!();
        println!("Run `juryboard --help` for usage information.");
        Ok(())
    }
}
