//! Page types
//!
//! One fetched page and the typed records inside it.

use crate::coerce::{coerce_field, FieldKind, FieldSpec, FieldValue};
use crate::types::{JsonObject, JsonValue};
use std::collections::BTreeMap;

/// One decoded record: field name to coerced value
///
/// Declared fields are run through their coercion rule; everything else is
/// kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Decode a raw payload object using the resource's field specs
    pub fn from_object(raw: &JsonObject, fields: &[FieldSpec]) -> Self {
        let values = raw
            .iter()
            .map(|(name, value)| {
                let kind = fields
                    .iter()
                    .find(|f| f.name == *name)
                    .map_or(FieldKind::Passthrough, |f| f.kind);
                (name.clone(), coerce_field(kind, value))
            })
            .collect();

        Self { values }
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Get a field's string form, if it has one
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    /// Render the record back to a JSON object
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.values
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

/// One fetched page: ordered records plus the next-page pointer
///
/// Immutable once constructed; the record count is whatever the server
/// actually returned, never assumed to match the requested page size.
/// `next_page_url` is `None` iff this is the last page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    records: Vec<Record>,
    next_page_url: Option<String>,
}

impl Page {
    /// Create a page from decoded records
    pub fn new(records: Vec<Record>, next_page_url: Option<String>) -> Self {
        Self {
            records,
            next_page_url,
        }
    }

    /// Records in server order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the page, keeping its records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// URL of the following page, if any
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page_url.as_deref()
    }

    /// Number of records actually returned
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Check whether this is the terminal page
    pub fn is_last(&self) -> bool {
        self.next_page_url.is_none()
    }

    /// Drop all records past `len`, used to honor a global record limit
    pub(crate) fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }
}
