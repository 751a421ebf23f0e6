//! Typed-field coercion module
//!
//! Converts wire-format strings into dates, timestamps, and numbers.
//!
//! # Overview
//!
//! List payloads are schema-described but not schema-enforced: the server may
//! return placeholder or null-ish strings for declared fields. Every coercer
//! here degrades to the original string on parse failure instead of erroring,
//! so one bad field never aborts deserialization of an otherwise-valid record.

mod coercers;
mod types;

pub use coercers::{
    coerce_date, coerce_date_time, coerce_decimal, coerce_field, coerce_integer,
    coerce_rfc2822_date_time,
};
pub use types::{FieldKind, FieldSpec, FieldValue};
