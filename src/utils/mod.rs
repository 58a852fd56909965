//! Utility functions and helpers.

use chrono::{DateTime, Utc};

/// Format a UTC timestamp the way diagnostics and notifications show it.
pub fn timestamp_utc(when: DateTime<Utc>) -> String {
    when.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_utc_format() {
        let when = Utc.with_ymd_and_hms(2026, 8, 24, 9, 30, 0).unwrap();
        assert_eq!(timestamp_utc(when), "2026-08-24 09:30:00 UTC");
    }
}
