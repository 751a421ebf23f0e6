//! Scripted in-memory fetcher for engine tests

use super::types::{FetchedPage, PageFetcher, PageRequest};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key under which the first-page (query) response is scripted
pub(crate) const FIRST: &str = "<first>";

/// In-memory `PageFetcher` serving scripted payloads
///
/// Query requests resolve under the [`FIRST`] key; URL requests resolve
/// under their exact URL. Every request is logged so tests can assert how
/// many fetches a traversal performed.
pub(crate) struct StubFetcher {
    pages: HashMap<String, FetchedPage>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script the first-page response
    #[must_use]
    pub fn first(self, payload: JsonValue) -> Self {
        self.respond(FIRST, 200, payload.to_string())
    }

    /// Script the response for a target URL
    #[must_use]
    pub fn url(self, url: impl Into<String>, payload: JsonValue) -> Self {
        self.respond(url, 200, payload.to_string())
    }

    /// Script an arbitrary status/body response
    #[must_use]
    pub fn respond(mut self, key: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(
            key.into(),
            FetchedPage {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Keys of the fetches performed, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> Result<FetchedPage> {
        let key = match request {
            PageRequest::Url(url) => url.clone(),
            PageRequest::Query(_) => FIRST.to_string(),
        };

        self.requests.lock().unwrap().push(key.clone());

        self.pages
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("no scripted page for '{key}'")))
    }
}
