//! Display formatting for elapsed durations.

use std::time::Duration;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Format a millisecond count as `HH:MM:SS.mmm`.
///
/// Hours are padded to at least two digits and otherwise grow without
/// wrapping, so `format_time(273_600_108)` is `"76:00:00.108"`. Every
/// component is truncated, never rounded.
pub fn format_time(milliseconds: u64) -> String {
    let hours = milliseconds / MS_PER_HOUR;
    let minutes = (milliseconds / MS_PER_MINUTE) % 60;
    let seconds = (milliseconds / MS_PER_SECOND) % 60;
    let millis = milliseconds % MS_PER_SECOND;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// [`format_time`] for a [`Duration`], dropping anything below a millisecond.
pub fn format_duration(duration: Duration) -> String {
    let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    format_time(ms)
}
