//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for running logs, events and energy intervals.
pub type Timestamp = DateTime<Utc>;

const MILLIS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Signed number of hours from `start` to `end`, at millisecond resolution.
///
/// Negative when `start` is after `end`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_between(start: Timestamp, end: Timestamp) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_count_whole_hours() {
        let start = now();
        assert_eq!(hours_between(start, start + Duration::hours(24)), 24.0);
    }

    #[test]
    fn should_count_fractional_hours() {
        let start = now();
        assert_eq!(hours_between(start, start + Duration::minutes(90)), 1.5);
    }

    #[test]
    fn should_be_negative_when_start_after_end() {
        let end = now();
        assert_eq!(hours_between(end + Duration::hours(2), end), -2.0);
    }
}
