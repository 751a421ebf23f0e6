//! Coercer implementations
//!
//! Each coercer parses one wire format, falling back to the raw string.

use super::types::{FieldKind, FieldValue};
use crate::types::JsonValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::trace;

/// Strict `YYYY-MM-DD` date
///
/// Invalid calendar dates (e.g. `2024-02-30`) fall back like any other
/// parse failure.
pub fn coerce_date(s: &str) -> FieldValue {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => FieldValue::Date(date),
        Err(_) => {
            trace!("Value '{s}' is not a YYYY-MM-DD date, keeping as string");
            FieldValue::Text(s.to_string())
        }
    }
}

/// Strict `YYYY-MM-DDTHH:mm:ssZ` UTC timestamp
pub fn coerce_date_time(s: &str) -> FieldValue {
    match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ") {
        Ok(naive) => FieldValue::DateTime(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)),
        Err(_) => {
            trace!("Value '{s}' is not an ISO 8601 timestamp, keeping as string");
            FieldValue::Text(s.to_string())
        }
    }
}

/// `ddd, DD MMM YYYY HH:mm:ss +0000` timestamp, normalized to UTC
pub fn coerce_rfc2822_date_time(s: &str) -> FieldValue {
    match DateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S %z") {
        Ok(dt) => FieldValue::DateTime(dt.with_timezone(&Utc)),
        Err(_) => {
            trace!("Value '{s}' is not an RFC 2822 timestamp, keeping as string");
            FieldValue::Text(s.to_string())
        }
    }
}

/// Decimal number carried as a string
///
/// Non-finite results (`NaN`, `inf`) count as parse failures.
pub fn coerce_decimal(s: &str) -> FieldValue {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => FieldValue::Decimal(n),
        _ => {
            trace!("Value '{s}' is not a decimal, keeping as string");
            FieldValue::Text(s.to_string())
        }
    }
}

/// Integer carried as a string
pub fn coerce_integer(s: &str) -> FieldValue {
    match s.trim().parse::<i64>() {
        Ok(n) => FieldValue::Integer(n),
        Err(_) => {
            trace!("Value '{s}' is not an integer, keeping as string");
            FieldValue::Text(s.to_string())
        }
    }
}

/// Apply a field's declared kind to a raw payload value
///
/// Only string values are coerced; everything else (including null) passes
/// through untouched as `Json`.
pub fn coerce_field(kind: FieldKind, raw: &JsonValue) -> FieldValue {
    let JsonValue::String(s) = raw else {
        return FieldValue::Json(raw.clone());
    };

    match kind {
        FieldKind::Date => coerce_date(s),
        FieldKind::DateTime => coerce_date_time(s),
        FieldKind::Rfc2822DateTime => coerce_rfc2822_date_time(s),
        FieldKind::Decimal => coerce_decimal(s),
        FieldKind::Integer => coerce_integer(s),
        FieldKind::Passthrough => FieldValue::Json(raw.clone()),
    }
}
