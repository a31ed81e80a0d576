//! Text charts for the screen view
//!
//! The public screen shows criterion averages and team profiles as
//! horizontal bars drawn with plain characters.

/// Render a horizontal text bar for `value` on a `0..=max` scale.
pub fn text_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || width == 0 {
        return String::new();
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

/// Width of the widest label, in characters
pub fn label_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
    labels
        .into_iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
}

/// Pad `label` with spaces to `width` characters
pub fn pad_label(label: &str, width: usize) -> String {
    let len = label.chars().count();
    if len >= width {
        label.to_string()
    } else {
        format!("{}{}", label, " ".repeat(width - len))
    }
}
