//! List surface module
//!
//! The public per-resource surface: one-shot pages, materialized lists,
//! and streamed traversals, all built on the cursor.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::fetch::{PageFetcher, PageQuery, PageRequest};
use crate::page::{decode_page, Page, Record};
use crate::resource::ResourceSpec;
use crate::stream::{RecordStream, StreamControl, StreamOutcome};
use crate::types::StringMap;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Options for a list traversal
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter parameters sent with the first request
    pub filters: StringMap,
    /// Requested page size (server clamps to [1, 1000]; default 50)
    pub page_size: Option<u32>,
    /// Exact upper bound on records across the whole traversal
    pub limit: Option<usize>,
}

impl ListOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
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

    /// Set the global record limit
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Per-resource list surface
///
/// Cheap to clone; two clients (or two traversals from one client) share no
/// mutable state and may run concurrently.
#[derive(Clone)]
pub struct ListClient {
    fetcher: Arc<dyn PageFetcher>,
    resource: Arc<ResourceSpec>,
}

impl ListClient {
    /// Create a list surface for a resource
    pub fn new(fetcher: Arc<dyn PageFetcher>, resource: ResourceSpec) -> Self {
        Self {
            fetcher,
            resource: Arc::new(resource),
        }
    }

    /// The resource this surface lists
    pub fn resource(&self) -> &ResourceSpec {
        &self.resource
    }

    /// Fetch exactly one page — the first page of the query
    ///
    /// Never traverses; the caller follows `next_page_url` via
    /// [`ListClient::page_at`] to page manually.
    pub async fn page(&self, options: &ListOptions) -> Result<Page> {
        let fetched = self.fetcher.fetch_page(&self.first_request(options)).await?;
        decode_page(&fetched, &self.resource)
    }

    /// Fetch exactly one page at a server-issued URL, requested verbatim
    pub async fn page_at(&self, target_url: &str) -> Result<Page> {
        let fetched = self
            .fetcher
            .fetch_page(&PageRequest::url(target_url))
            .await?;
        decode_page(&fetched, &self.resource)
    }

    /// Materialize every matching record, up to `options.limit`
    ///
    /// All-or-nothing: a failure on any page fails the whole call with no
    /// partial results. Prefer [`ListClient::each`] or
    /// [`ListClient::open`] for large result sets.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Record>> {
        let mut cursor = self.start_cursor(options).await?;

        let mut records: Vec<Record> = cursor.current().records().to_vec();
        while let Some(page) = cursor.advance().await? {
            records.extend(page.records().iter().cloned());
        }

        debug!(
            "Listed {} records of '{}'",
            records.len(),
            self.resource.name
        );
        Ok(records)
    }

    /// Open a record stream over the traversal
    pub async fn open(&self, options: &ListOptions) -> Result<RecordStream> {
        Ok(RecordStream::new(self.start_cursor(options).await?))
    }

    /// Stream records through a handler
    ///
    /// Thin adapter over [`RecordStream::run`]: the handler is awaited per
    /// record, and the single return value reports how the traversal ended.
    /// Unlike [`ListClient::list`], records delivered before a failure have
    /// already reached the handler.
    pub async fn each<F, Fut>(&self, options: &ListOptions, on_record: F) -> Result<StreamOutcome>
    where
        F: FnMut(Record) -> Fut,
        Fut: Future<Output = Result<StreamControl>>,
    {
        self.open(options).await?.run(on_record).await
    }

    async fn start_cursor(&self, options: &ListOptions) -> Result<Cursor> {
        Cursor::start(
            self.fetcher.clone(),
            self.resource.clone(),
            self.first_request(options),
            options.limit,
        )
        .await
    }

    fn first_request(&self, options: &ListOptions) -> PageRequest {
        let mut query = PageQuery::new(&self.resource.path);
        query.filters = options.filters.clone();
        query.page_size = options.page_size;
        PageRequest::query(query)
    }
}

impl std::fmt::Debug for ListClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListClient")
            .field("resource", &self.resource.name)
            .finish_non_exhaustive()
    }
}
