//! Page fetching module
//!
//! The boundary between the pagination engine and the HTTP transport.
//!
//! # Overview
//!
//! The engine only ever asks for "one page, given a URL or a query" through
//! the [`PageFetcher`] trait. [`HttpPageFetcher`] is the reqwest-backed
//! default. Retry, backoff, and authentication policy belong to fetcher
//! implementations, never to the engine.

mod http;
mod types;

pub use http::{HttpFetcherConfig, HttpPageFetcher};
pub use types::{FetchedPage, PageFetcher, PageQuery, PageRequest};

#[cfg(test)]
pub(crate) mod stub;
