// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # pagewire
//!
//! A typed pagination and streaming engine for cloud communications REST
//! APIs. One engine drives every list endpoint: video, insights, numbers,
//! serverless, trunking, wireless.
//!
//! ## Features
//!
//! - **Cursor traversal**: walk server-linked pages under an exact record limit
//! - **Typed records**: wire strings coerced to dates, timestamps, and numbers,
//!   degrading to the raw string instead of failing
//! - **Streaming**: one-record-in-flight delivery with backpressure and
//!   cooperative cancellation
//! - **Pluggable transport**: the engine only knows "fetch one page"
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewire::fetch::HttpPageFetcher;
//! use pagewire::list::{ListClient, ListOptions};
//! use pagewire::resources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pagewire::Result<()> {
//!     let fetcher = Arc::new(HttpPageFetcher::for_base_url("https://video.example.com"));
//!     let rooms = ListClient::new(fetcher, resources::get_builtin("rooms").unwrap());
//!
//!     // Materialize up to 200 records
//!     let records = rooms.list(&ListOptions::new().limit(200)).await?;
//!
//!     // Or stream them one at a time
//!     let mut stream = rooms.open(&ListOptions::new()).await?;
//!     while let Some(record) = stream.next().await {
//!         let record = record?;
//!         println!("{}", record.to_json());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ListClient                          │
//! │   list() → Vec<Record>   page() → Page   each() → Outcome   │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────────┬────────────────────┐
//! │ RecordStream │         Cursor          │    PageFetcher     │
//! ├──────────────┼─────────────────────────┤────────────────────┤
//! │ next()/ack   │ start / advance         │ HTTP GET one page  │
//! │ run(handler) │ limit clamping          │ (reqwest default)  │
//! │ cancellation │ done-poisoning          │                    │
//! └──────────────┴─────────────────────────┴────────────────────┘
//!                               │
//!                  Page ← decode ← FieldCoercion
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Typed-field coercion
pub mod coerce;

/// Page decoding
pub mod page;

/// Page fetching boundary and HTTP fetcher
pub mod fetch;

/// Cursor traversal
pub mod cursor;

/// Record streaming
pub mod stream;

/// Per-resource list surface
pub mod list;

/// Resource descriptions
pub mod resource;

/// Built-in resource catalog
pub mod resources;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use coerce::{FieldKind, FieldSpec, FieldValue};
pub use cursor::Cursor;
pub use list::{ListClient, ListOptions};
pub use page::{Page, Record};
pub use resource::ResourceSpec;
pub use stream::{RecordStream, StreamControl, StreamOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
