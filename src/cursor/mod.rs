//! Cursor module
//!
//! Sequential page traversal under a global record limit.
//!
//! # Overview
//!
//! A `Cursor` owns the page currently being consumed and knows how to move
//! past it. Fetches are strictly sequential: the next page's URL is only
//! known once the current response has arrived, and nothing is prefetched
//! while the caller is still consuming. Any fetch or decode failure leaves
//! the cursor done, so a failed traversal cannot be resumed accidentally.

use crate::error::Result;
use crate::fetch::{PageFetcher, PageRequest};
use crate::page::{decode_page, Page};
use crate::resource::ResourceSpec;
use std::sync::Arc;
use tracing::debug;

/// Stateful traversal across pages honoring a global record limit
///
/// The current page's records are exposed exactly once, through
/// [`Cursor::current`] after `start` and through the page returned by each
/// [`Cursor::advance`]. Advancing never re-yields the current page.
pub struct Cursor {
    fetcher: Arc<dyn PageFetcher>,
    resource: Arc<ResourceSpec>,
    current: Page,
    remaining: Option<usize>,
    done: bool,
}

impl Cursor {
    /// Fetch the first page and position the cursor on it
    pub async fn start(
        fetcher: Arc<dyn PageFetcher>,
        resource: Arc<ResourceSpec>,
        request: PageRequest,
        limit: Option<usize>,
    ) -> Result<Self> {
        let fetched = fetcher.fetch_page(&request).await?;
        let mut current = decode_page(&fetched, &resource)?;

        let mut remaining = limit;
        expose_clamped(&mut current, &mut remaining);

        Ok(Self {
            fetcher,
            resource,
            current,
            remaining,
            done: false,
        })
    }

    /// The page the cursor is positioned on
    pub fn current(&self) -> &Page {
        &self.current
    }

    /// Check whether the traversal is over
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Check whether the record limit consumed the whole allowance
    pub fn limit_reached(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Move past the current page
    ///
    /// Returns the next page with its records already clamped to the
    /// remaining limit, or `None` when the traversal is over (idempotent).
    /// A fetch or decode failure marks the cursor done and propagates.
    pub async fn advance(&mut self) -> Result<Option<&Page>> {
        if self.done {
            return Ok(None);
        }

        if self.limit_reached() {
            debug!("Record limit reached for '{}'", self.resource.name);
            self.done = true;
            return Ok(None);
        }

        let Some(next_url) = self.current.next_page_url() else {
            debug!("Last page of '{}' reached", self.resource.name);
            self.done = true;
            return Ok(None);
        };
        let request = PageRequest::url(next_url);

        let page = match self.fetch_next(&request).await {
            Ok(page) => page,
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };

        self.current = page;
        Ok(Some(&self.current))
    }

    async fn fetch_next(&mut self, request: &PageRequest) -> Result<Page> {
        let fetched = self.fetcher.fetch_page(request).await?;
        let mut page = decode_page(&fetched, &self.resource)?;
        expose_clamped(&mut page, &mut self.remaining);
        Ok(page)
    }
}

impl std::fmt::Debug for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("resource", &self.resource.name)
            .field("page_size", &self.current.size())
            .field("remaining", &self.remaining)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Clamp a page's records to the remaining allowance and consume it
///
/// A page may be partially consumed; records past the limit are dropped
/// before the caller ever sees them.
fn expose_clamped(page: &mut Page, remaining: &mut Option<usize>) {
    if let Some(rem) = remaining {
        let exposed = page.size().min(*rem);
        page.truncate(exposed);
        *rem -= exposed;
    }
}
