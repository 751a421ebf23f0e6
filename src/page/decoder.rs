//! Page decoding
//!
//! Turns a raw fetch result into a `Page`, classifying non-2xx responses.

use super::types::{Page, Record};
use crate::error::{Error, Result};
use crate::fetch::FetchedPage;
use crate::resource::ResourceSpec;
use crate::types::{JsonObject, JsonValue, OptionStringExt};
use tracing::debug;

/// Decode a raw fetch result into a page of typed records
///
/// Non-2xx responses become `HttpStatus` errors with the body passed
/// through verbatim for the caller to inspect.
pub fn decode_page(fetched: &FetchedPage, resource: &ResourceSpec) -> Result<Page> {
    if !fetched.is_success() {
        return Err(Error::http_status(fetched.status, fetched.body.clone()));
    }

    let payload: JsonValue = serde_json::from_str(&fetched.body)?;
    decode_payload(&payload, resource)
}

/// Decode an already-parsed list payload
pub fn decode_payload(payload: &JsonValue, resource: &ResourceSpec) -> Result<Page> {
    let object = payload
        .as_object()
        .ok_or_else(|| Error::malformed_payload("list payload is not a JSON object"))?;

    let records_value = object.get(&resource.records_key).ok_or_else(|| {
        Error::malformed_payload(format!(
            "missing list property '{}' in payload",
            resource.records_key
        ))
    })?;

    let raw_records = records_value.as_array().ok_or_else(|| {
        Error::malformed_payload(format!("'{}' is not an array", resource.records_key))
    })?;

    let records = raw_records
        .iter()
        .map(|raw| {
            raw.as_object()
                .map(|obj| Record::from_object(obj, &resource.fields))
                .ok_or_else(|| {
                    Error::malformed_payload(format!(
                        "'{}' entry is not an object",
                        resource.records_key
                    ))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let next_page_url = extract_next_page_url(object);

    debug!(
        "Decoded page of '{}': {} records, next page: {}",
        resource.name,
        records.len(),
        next_page_url.as_deref().unwrap_or("none")
    );

    Ok(Page::new(records, next_page_url))
}

/// Find the next-page URL in either wire style
///
/// Newer domains nest it under `meta.next_page_url`; older ones expose a
/// top-level `next_page_uri`. Null and empty string both mean last page.
fn extract_next_page_url(object: &JsonObject) -> Option<String> {
    object
        .get("meta")
        .and_then(|meta| meta.get("next_page_url"))
        .and_then(JsonValue::as_str)
        .map(String::from)
        .none_if_empty()
        .or_else(|| {
            object
                .get("next_page_uri")
                .and_then(JsonValue::as_str)
                .map(String::from)
                .none_if_empty()
        })
}
