//! Built-in resource catalog
//!
//! Ready-made `ResourceSpec`s for commonly listed resources across the API
//! domains, so `--resource rooms` works without hand-writing field specs.
//! Newer domains (video, insights, trunking, wireless, serverless) carry
//! ISO 8601 timestamps; the 2010-era message and number lists use RFC 2822.

use crate::coerce::FieldSpec;
use crate::resource::ResourceSpec;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in resource specs by name
pub static BUILTIN_RESOURCES: LazyLock<HashMap<&'static str, ResourceSpec>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        // Video
        m.insert("rooms", video_rooms());
        m.insert("compositions", video_compositions());

        // Voice Insights
        m.insert("call-summaries", call_summaries());

        // Messaging (2010-era list shape)
        m.insert("messages", messages());

        // Phone numbers (2010-era list shape)
        m.insert("incoming-phone-numbers", incoming_phone_numbers());

        // SIP Trunking
        m.insert("trunks", trunks());

        // Wireless
        m.insert("sims", wireless_sims());

        // Serverless
        m.insert("services", serverless_services());

        m
    });

/// Get a built-in resource spec by name
pub fn get_builtin(name: &str) -> Option<ResourceSpec> {
    BUILTIN_RESOURCES.get(name).cloned()
}

/// Check if a name refers to a built-in resource
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_RESOURCES.contains_key(name)
}

/// List all built-in resource names, sorted
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN_RESOURCES.keys().copied().collect();
    names.sort_unstable();
    names
}

fn video_rooms() -> ResourceSpec {
    ResourceSpec::new("rooms", "/v1/Rooms", "rooms").fields([
        FieldSpec::date_time("date_created"),
        FieldSpec::date_time("date_updated"),
        FieldSpec::date_time("end_time"),
        FieldSpec::integer("duration"),
        FieldSpec::integer("max_participants"),
    ])
}

fn video_compositions() -> ResourceSpec {
    ResourceSpec::new("compositions", "/v1/Compositions", "compositions").fields([
        FieldSpec::date_time("date_created"),
        FieldSpec::date_time("date_completed"),
        FieldSpec::date_time("date_deleted"),
        FieldSpec::integer("duration"),
        FieldSpec::integer("bitrate"),
        FieldSpec::integer("size"),
    ])
}

fn call_summaries() -> ResourceSpec {
    ResourceSpec::new("call-summaries", "/v1/Voice/Summaries", "call_summaries").fields([
        FieldSpec::date_time("start_time"),
        FieldSpec::date_time("end_time"),
        FieldSpec::integer("duration"),
        FieldSpec::integer("connect_duration"),
    ])
}

fn messages() -> ResourceSpec {
    ResourceSpec::new("messages", "/2010-04-01/Messages.json", "messages").fields([
        FieldSpec::rfc2822_date_time("date_created"),
        FieldSpec::rfc2822_date_time("date_updated"),
        FieldSpec::rfc2822_date_time("date_sent"),
        FieldSpec::decimal("price"),
        FieldSpec::integer("num_segments"),
        FieldSpec::integer("num_media"),
    ])
}

fn incoming_phone_numbers() -> ResourceSpec {
    ResourceSpec::new(
        "incoming-phone-numbers",
        "/2010-04-01/IncomingPhoneNumbers.json",
        "incoming_phone_numbers",
    )
    .fields([
        FieldSpec::rfc2822_date_time("date_created"),
        FieldSpec::rfc2822_date_time("date_updated"),
    ])
}

fn trunks() -> ResourceSpec {
    ResourceSpec::new("trunks", "/v1/Trunks", "trunks").fields([
        FieldSpec::date_time("date_created"),
        FieldSpec::date_time("date_updated"),
    ])
}

fn wireless_sims() -> ResourceSpec {
    ResourceSpec::new("sims", "/v1/Sims", "sims").fields([
        FieldSpec::date_time("date_created"),
        FieldSpec::date_time("date_updated"),
    ])
}

fn serverless_services() -> ResourceSpec {
    ResourceSpec::new("services", "/v1/Services", "services").fields([
        FieldSpec::date_time("date_created"),
        FieldSpec::date_time("date_updated"),
    ])
}
