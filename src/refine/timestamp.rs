//! Timestamp coercion to canonical ISO-8601 strings.
//!
//! Upstream shapes deliver creation times as epoch milliseconds (number or
//! string), RFC 3339, RFC 2822, or bare naive dates. Everything usable is
//! normalized to the `"2021-01-01T00:00:00.000Z"` form of the upstream
//! contract; everything else is absent.

use crate::refine::coerce;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Resolve a timestamp candidate and return it as an ISO-8601 UTC string.
///
/// The string coercer picks the winning candidate path first; only that one
/// value is parsed. A garbage value on an earlier path is not rescued by a
/// later path.
pub fn timestamp_at(value: &Value, paths: &[&str]) -> Option<String> {
    coerce::string_at(value, paths).as_deref().and_then(to_iso8601)
}

/// Best-effort parse of a single raw timestamp string.
///
/// A string that parses as a finite number is treated as epoch
/// milliseconds; out-of-range epochs are absent, never a panic.
pub fn to_iso8601(raw: &str) -> Option<String> {
    if let Ok(n) = raw.parse::<f64>() {
        if n.is_finite() {
            return Utc.timestamp_millis_opt(n as i64).single().map(format_utc);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(format_utc(dt.with_timezone(&Utc)));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(format_utc(dt.with_timezone(&Utc)));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(format_utc(naive.and_utc()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(format_utc(naive.and_utc()));
    }

    None
}

/// Current time in the same canonical shape, for callers that fall back to
/// "now" when a source timestamp is unusable.
pub fn now_iso8601() -> String {
    format_utc(Utc::now())
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_epoch_millis_number() {
        let value = json!({"createdAt": 1612137600000i64});
        assert_eq!(
            timestamp_at(&value, &["createdAt"]),
            Some("2021-02-01T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_epoch_millis_string() {
        assert_eq!(
            to_iso8601("1612137600000"),
            Some("2021-02-01T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_rfc3339_passthrough_shape() {
        assert_eq!(
            to_iso8601("2021-02-01T00:00:00.000Z"),
            Some("2021-02-01T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_rfc3339_offset_converted_to_utc() {
        assert_eq!(
            to_iso8601("2021-02-01T02:30:00+02:30"),
            Some("2021-02-01T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(
            to_iso8601("2021-02-01 12:00:00"),
            Some("2021-02-01T12:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_date_only() {
        assert_eq!(
            to_iso8601("2021-02-01"),
            Some("2021-02-01T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_garbage_is_absent() {
        assert_eq!(to_iso8601("yesterday-ish"), None);
        assert_eq!(to_iso8601("inf"), None);
    }

    #[test]
    fn test_out_of_range_epoch_is_absent() {
        assert_eq!(to_iso8601("1e30"), None);
    }

    #[test]
    fn test_candidate_order() {
        let value = json!({"created_at": "2020-01-01", "timestamp": 1612137600000i64});
        assert_eq!(
            timestamp_at(&value, &["createdAt", "created_at", "timestamp"]),
            Some("2020-01-01T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_earlier_garbage_candidate_is_not_rescued() {
        // The candidate is picked before parsing; a later, parsable path
        // does not win once an earlier path resolved to a string.
        let value = json!({"created_at": "a while ago", "timestamp": 1612137600000i64});
        assert_eq!(timestamp_at(&value, &["created_at", "timestamp"]), None);
    }
}
