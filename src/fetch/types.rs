//! Fetch types and the fetcher trait

use crate::error::Result;
use crate::types::StringMap;
use async_trait::async_trait;

/// Query describing the first page of a traversal
///
/// Once the server issues a next-page URL, filters are never re-applied;
/// the server embeds them in the URL it returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageQuery {
    /// Request path (e.g. `/v1/Compositions`)
    pub path: String,
    /// Filter parameters, sent verbatim as query parameters
    pub filters: StringMap,
    /// Requested page size; the default of 50 is sent when unset
    pub page_size: Option<u32>,
    /// Page number, for offset-addressed pages
    pub page_number: Option<u32>,
    /// Opaque page token, for token-addressed pages
    pub page_token: Option<String>,
}

impl PageQuery {
    /// Create a query for a request path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Add a filter parameter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Set the requested page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the page number
    #[must_use]
    pub fn page_number(mut self, number: u32) -> Self {
        self.page_number = Some(number);
        self
    }

    /// Set the page token
    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }
}

/// Immutable description of one page fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Server-issued URL, requested verbatim
    Url(String),
    /// First-page query built from filter parameters
    Query(PageQuery),
}

impl PageRequest {
    /// Request a server-issued URL verbatim
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Request the first page of a query
    pub fn query(query: PageQuery) -> Self {
        Self::Query(query)
    }

    /// Check if this request targets a server-issued URL
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Raw result of one page fetch
///
/// Non-2xx responses are returned verbatim; classification happens in the
/// page decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Response body as received
    pub body: String,
}

impl FetchedPage {
    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Boundary trait: fetch one page
///
/// Implementations own transport policy (timeouts, retries, auth). A failed
/// fetch is a transport error; a non-2xx response is a successful fetch.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Perform the network call for one page
    async fn fetch_page(&self, request: &PageRequest) -> Result<FetchedPage>;
}
