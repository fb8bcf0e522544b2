//! Time formatting for progress display

/// Format a position in seconds as `M:SS` text with zero-padded seconds
///
/// Non-finite and negative inputs render as `0:00` so NaN never reaches
/// display text.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
