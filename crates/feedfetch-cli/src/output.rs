//! CLI output formatting.

use std::time::Duration;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Ratio of a slower run to a faster one, e.g. `2.00x`.
///
/// Returns `None` when the faster run took no measurable time.
#[must_use]
pub fn format_speedup(slower: Duration, faster: Duration) -> Option<String> {
    if faster.is_zero() {
        return None;
    }
    Some(format!("{:.2}x", slower.as_secs_f64() / faster.as_secs_f64()))
}
