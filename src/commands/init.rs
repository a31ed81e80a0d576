//! `juryboard init` command - create a new store
//!
//! - Idempotent (safe to run multiple times)
//! - Creates the store directory, default config and default board

use std::path::Path;

use crate::cli::paths::resolve_against;
use crate::cli::{Cli, InitArgs, OutputFormat};
use juryboard_core::error::Result;
use juryboard_core::records::escape_quotes;
use juryboard_core::store::{InitOptions, Store};

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, args: &InitArgs) -> Result<()> {
    let options = InitOptions {
        visible: args.visible,
        language: args.language,
        max_score: args.max_score,
    };

    let store = if let Some(path) = cli.store.as_ref() {
        Store::init_at(&resolve_against(root, path), options)?
    } else {
        Store::init(root, options)?
    };
    let config = store.config();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "max_score": config.max_score,
                "language": config.language.to_string(),
                "message": "Store initialized"
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Initialized juryboard store at {}", store.root().display());
                println!();
                println!("Run `juryboard show` to see the score grid.");
            }
        }
        OutputFormat::Records => {
            println!(
                "H juryboard=1 mode=init store=\"{}\" max_score={}",
                escape_quotes(&store.root().display().to_string()),
                config.max_score
            );
        }
    }
    Ok(())
}
