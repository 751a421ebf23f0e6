//! Coercion types
//!
//! Defines the per-field coercion rules and the typed value they produce.

use crate::types::JsonValue;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Wire format of a declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// `YYYY-MM-DD` date
    Date,
    /// `YYYY-MM-DDTHH:mm:ssZ` timestamp
    DateTime,
    /// `ddd, DD MMM YYYY HH:mm:ss +0000` timestamp (older API domains)
    Rfc2822DateTime,
    /// Decimal number carried as a string (e.g. prices)
    Decimal,
    /// Integer carried as a string (e.g. durations)
    Integer,
    /// No coercion, value kept as received
    #[default]
    Passthrough,
}

/// Static coercion rule for one declared field of a resource
///
/// Defined once per resource type, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in the wire payload
    pub name: String,
    /// How to coerce the field's string value
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create a field spec
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Declare a `YYYY-MM-DD` date field
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Declare an ISO 8601 timestamp field
    pub fn date_time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    /// Declare an RFC 2822 timestamp field
    pub fn rfc2822_date_time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Rfc2822DateTime)
    }

    /// Declare a decimal field
    pub fn decimal(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Decimal)
    }

    /// Declare an integer field
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer)
    }
}

/// A coerced field value
///
/// Free-form payload fields (layout blobs, metadata) stay as `Json`;
/// declared fields that fail to parse degrade to `Text` with the raw string.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Calendar date
    Date(NaiveDate),
    /// UTC timestamp
    DateTime(DateTime<Utc>),
    /// Integer
    Integer(i64),
    /// Decimal number
    Decimal(f64),
    /// String, either declared as text or kept raw after a failed parse
    Text(String),
    /// Opaque structured value (null, bool, number, string, array, map)
    Json(JsonValue),
}

impl FieldValue {
    /// Date value, if this is a `Date`
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Timestamp value, if this is a `DateTime`
    pub fn as_date_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Integer value, if this is an `Integer`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Decimal value, if this is a `Decimal`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Decimal(n) => Some(*n),
            _ => None,
        }
    }

    /// String value, if this is `Text` (or a `Json` string)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Json(JsonValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Raw JSON value, if this is `Json`
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Render back to JSON (dates as ISO strings, timestamps as RFC 3339)
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Date(d) => JsonValue::String(d.format("%Y-%m-%d").to_string()),
            Self::DateTime(dt) => JsonValue::String(dt.to_rfc3339()),
            Self::Integer(n) => JsonValue::from(*n),
            Self::Decimal(n) => serde_json::Number::from_f64(*n)
                .map_or(JsonValue::Null, JsonValue::Number),
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Json(v) => v.clone(),
        }
    }
}
