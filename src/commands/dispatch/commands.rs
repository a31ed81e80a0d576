//! Command implementations for all juryboard commands

use crate::cli::{Commands, DrawCommands};
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use juryboard_core::error::Result;
use juryboard_core::store::Store;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if let Commands::Init(args) = self {
            return commands::init::execute(ctx.cli, ctx.root, args);
        }

        let store = if self.requires_pin() {
            ctx.open_admin_store()?
        } else {
            ctx.discover_or_open_store()?
        };

        let result = execute_with_store(self, ctx, &store);
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

fn execute_with_store(cmd: &Commands, ctx: &CommandContext, store: &Store) -> Result<()> {
    let cli = ctx.cli;
    match cmd {
        Commands::Init(args) => commands::init::execute(cli, ctx.root, args),
        Commands::Score(args) => commands::score::execute_score(cli, store, args),
        Commands::Row(args) => commands::score::execute_row(cli, store, args),
        Commands::Names(args) => commands::names::execute(cli, store, args),
        Commands::Reset => commands::reset::execute(cli, store),
        Commands::Show => commands::show::execute(cli, store),
        Commands::Board(args) => commands::board::execute(cli, store, args),
        Commands::Export(args) => commands::export::execute(cli, store, args),
        Commands::Draw { command } => execute_draw(ctx, store, command),
    }
}

fn execute_draw(ctx: &CommandContext, store: &Store, command: &DrawCommands) -> Result<()> {
    let cli = ctx.cli;
    match command {
        DrawCommands::Commit { secret, force } => {
            commands::draw::execute_commit(cli, store, secret.as_deref(), *force)
        }
        DrawCommands::Reveal { secret } => commands::draw::execute_reveal(cli, store, secret),
        DrawCommands::Verify { secret, commitment } => {
            commands::draw::execute_verify(cli, store, secret, commitment.as_deref())
        }
        DrawCommands::Show => commands::draw::execute_show(cli, store),
    }
}
