//! `juryboard export` - write the ranked table to a file

use std::path::Path;

use crate::cli::{Cli, ExportArgs, OutputFormat};
use crate::commands::format::print_json_status;
use juryboard_core::error::Result;
use juryboard_core::export::{export_to, ExportFormat};
use juryboard_core::records::{escape_quotes, path_relative_to_cwd};
use juryboard_core::store::Store;

/// Pick the export format from the file extension, defaulting to CSV
fn format_for_path(path: &Path) -> ExportFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
        _ => ExportFormat::Csv,
    }
}

/// Execute the export command
pub fn execute(cli: &Cli, store: &Store, args: &ExportArgs) -> Result<()> {
    let format = args
        .export_format
        .unwrap_or_else(|| format_for_path(&args.to));
    let state = store.load_state()?;
    let rows = export_to(&state, store.config(), &args.to, format)?;
    let shown = path_relative_to_cwd(&args.to);

    match cli.format {
        OutputFormat::Json => print_json_status(
            "ok",
            None,
            &[
                ("path", serde_json::json!(shown)),
                ("format", serde_json::json!(format.to_string())),
                ("rows", serde_json::json!(rows)),
            ],
        )?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Exported {} teams to {} ({})", rows, shown, format);
            }
        }
        OutputFormat::Records => println!(
            "E path=\"{}\" format={} rows={}",
            escape_quotes(&shown),
            format,
            rows
        ),
    }
    Ok(())
}
