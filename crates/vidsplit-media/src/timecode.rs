//! Human-readable timecodes.

/// Render `seconds` as `HH:MM:SS`.
///
/// Fractions are truncated and hours keep counting past 24. Negative and
/// non-finite inputs render as `00:00:00`.
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
