//! Coercion helpers for HTML form input.
//!
//! Browsers submit untouched optional fields as empty strings; optional
//! numeric and text fields must land as `None`, never as zero or `""`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// Deserialize an optional form field, treating an empty string as absent.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Parse an ISO-8601 timestamp as submitted by the edit forms. Accepts RFC 3339
/// as well as the naive `2024-01-01T08:30[:00]` shape that
/// `<input type="datetime-local">` produces; naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(AppError::Validation(format!("invalid timestamp: {raw}")))
}

/// Parse an ISO calendar date (`2024-01-05`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[derive(Debug, serde::Deserialize)]
    struct OptionalField {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        calories: Option<i64>,
    }

    #[test]
    fn empty_string_is_none() {
        let parsed: OptionalField = serde_json::from_str(r#"{"calories": ""}"#).unwrap();
        assert_eq!(parsed.calories, None);
    }

    #[test]
    fn missing_field_is_none() {
        let parsed: OptionalField = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.calories, None);
    }

    #[test]
    fn zero_stays_zero() {
        let parsed: OptionalField = serde_json::from_str(r#"{"calories": "0"}"#).unwrap();
        assert_eq!(parsed.calories, Some(0));
    }

    #[test]
    fn parses_datetime_local_without_seconds() {
        let ts = parse_timestamp("2024-01-01T08:30").unwrap();
        assert_eq!(ts.hour(), 8);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn parses_rfc3339() {
        let ts = parse_timestamp("2024-01-01T08:30:00+09:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2023-12-31T23:30:00+00:00");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(parse_timestamp("yesterday-ish").is_err());
    }

    #[test]
    fn parses_iso_date() {
        let date = parse_date("2024-01-05").unwrap();
        assert_eq!(date.to_string(), "2024-01-05");
        assert!(parse_date("05/01/2024").is_err());
    }
}
