// SPDX-License-Identifier: MPL-2.0
//! Time display formatting.

/// Seconds per hour.
const SECS_PER_HOUR: u64 = 3600;

/// Seconds per minute.
const SECS_PER_MINUTE: u64 = 60;

/// Formats a position in seconds as `H:MM:SS`, or `M:SS` under one hour.
///
/// Fractions are truncated; negative or non-finite input renders as `0:00`.
///
/// # Examples
///
/// ```
/// use insync_player::domain::time::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.9), "1:05");
/// assert_eq!(format_time(3725.0), "1:02:05");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
