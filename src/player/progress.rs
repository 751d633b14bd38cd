//! Derived playback progress and time formatting.

use std::time::Duration;

/// Normalized playback position in `[0, 100]`.
///
/// Unknown or zero duration yields 0 rather than letting the division
/// produce a meaningless value.
pub fn percent(position: Duration, duration: Option<Duration>) -> f64 {
    let Some(total) = duration else {
        return 0.0;
    };
    if total.is_zero() {
        return 0.0;
    }

    (position.as_secs_f64() / total.as_secs_f64() * 100.0).clamp(0.0, 100.0)
}

/// Format whole seconds as `m:ss`, minutes unpadded and seconds zero-padded.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
