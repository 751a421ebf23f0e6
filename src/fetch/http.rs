//! HTTP page fetcher
//!
//! Default `PageFetcher` backed by reqwest: base-URL joining, default
//! headers, user agent, timeout. No retry or signing at this layer.

use super::types::{FetchedPage, PageFetcher, PageQuery, PageRequest};
use crate::error::Result;
use crate::types::{clamp_page_size, StringMap, DEFAULT_PAGE_SIZE};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP page fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Base URL prefixed to relative request paths
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl HttpFetcherConfig {
    /// Create a config for a base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("pagewire/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// HTTP page fetcher
pub struct HttpPageFetcher {
    client: Client,
    config: HttpFetcherConfig,
}

impl HttpPageFetcher {
    /// Create a fetcher from a config
    pub fn new(config: HttpFetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Create a fetcher for a base URL with default settings
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self::new(HttpFetcherConfig::new(base_url))
    }

    /// Build the full URL for a request path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Query parameters for a first-page query
    fn page_params(query: &PageQuery) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = query
            .filters
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        params.sort();

        let page_size = clamp_page_size(query.page_size.unwrap_or(DEFAULT_PAGE_SIZE));
        params.push(("PageSize".to_string(), page_size.to_string()));

        if let Some(number) = query.page_number {
            params.push(("Page".to_string(), number.to_string()));
        }
        if let Some(token) = &query.page_token {
            params.push(("PageToken".to_string(), token.clone()));
        }

        params
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> Result<FetchedPage> {
        let mut req = match request {
            PageRequest::Url(target) => {
                let full_url = self.build_url(target);
                url::Url::parse(&full_url)?;
                debug!("Fetching page at {full_url}");
                self.client.get(full_url)
            }
            PageRequest::Query(query) => {
                let full_url = self.build_url(&query.path);
                url::Url::parse(&full_url)?;
                debug!("Fetching first page of {full_url}");
                self.client.get(full_url).query(&Self::page_params(query))
            }
        };

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Page fetch returned HTTP {status} ({} bytes)", body.len());

        Ok(FetchedPage { status, body })
    }
}

impl std::fmt::Debug for HttpPageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPageFetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
