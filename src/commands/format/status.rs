//! Status message formatting helpers

use juryboard_core::board::BoardState;
use juryboard_core::error::Result;
use juryboard_core::records::escape_quotes;
use serde_json::json;

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("ok", Some("Board reset"), &[("teams", json!(7))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the records header line for a view
pub fn print_records_header(view: &str, state: &BoardState) {
    println!(
        "H juryboard=1 view={} teams={} criteria={} updated=\"{}\"",
        view,
        state.teams.len(),
        state.criteria.len(),
        escape_quotes(state.updated_at.as_deref().unwrap_or(""))
    );
}
