//! Server timestamp parsing.
//!
//! The worldstate API reports activation and expiry times as RFC 3339
//! strings with an offset (e.g. `2023-03-15T10:00:00.000+01:00`). Parse
//! functions for entity types can use [`parse_server_time`] to turn those
//! into `DateTime<Utc>` values without repeating the format handling.

use chrono::{DateTime, Utc};

/// Parse a server-provided RFC 3339 timestamp, normalized to UTC.
///
/// Returns `None` for an absent or unparseable stamp; the API omits these
/// fields on some payloads and callers treat both cases the same.
pub fn parse_server_time(stamp: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(stamp) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!("unparseable server timestamp {stamp:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc_stamp() {
        let parsed = parse_server_time("2023-03-15T10:00:00.000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 3, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_offset_stamp_normalizes_to_utc() {
        let parsed = parse_server_time("2023-03-15T10:00:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 3, 15, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        assert!(parse_server_time("not a timestamp").is_none());
        assert!(parse_server_time("").is_none());
    }
}
