//! Value parsers for clap arguments

use juryboard_core::export::ExportFormat;
use juryboard_core::labels::Language;

pub fn parse_language(s: &str) -> Result<Language, String> {
    s.parse::<Language>().map_err(|e| e.to_string())
}

pub fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}

pub fn parse_max_score(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(0) => Err("max score must be at least 1".to_string()),
        Ok(v) => Ok(v),
        Err(e) => Err(format!("invalid max score '{}': {}", s, e)),
    }
}
