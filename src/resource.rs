//! Resource descriptions
//!
//! A `ResourceSpec` is the static metadata a list surface is instantiated
//! with: where the collection lives, which payload key holds the records,
//! and how declared fields are typed.

use crate::coerce::FieldSpec;

/// Static description of one listable resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSpec {
    /// Resource name (e.g. `compositions`)
    pub name: String,
    /// Request path for the first page (e.g. `/v1/Compositions`)
    pub path: String,
    /// Payload key holding the record array
    pub records_key: String,
    /// Declared field coercion rules
    pub fields: Vec<FieldSpec>,
}

impl ResourceSpec {
    /// Create a resource spec with no declared fields
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        records_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            records_key: records_key.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a typed field
    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare several typed fields at once
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::FieldKind;

    #[test]
    fn test_resource_spec_builder() {
        let spec = ResourceSpec::new("rooms", "/v1/Rooms", "rooms")
            .field(FieldSpec::date_time("date_created"))
            .fields([FieldSpec::integer("duration"), FieldSpec::decimal("price")]);

        assert_eq!(spec.name, "rooms");
        assert_eq!(spec.records_key, "rooms");
        assert_eq!(spec.fields.len(), 3);
        assert_eq!(spec.fields[1].kind, FieldKind::Integer);
    }
}
