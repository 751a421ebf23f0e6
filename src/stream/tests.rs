//! Tests for the record stream

use super::*;
use crate::error::Error;
use crate::fetch::stub::StubFetcher;
use crate::fetch::{PageQuery, PageRequest};
use crate::resource::ResourceSpec;
use futures::StreamExt;
use serde_json::json;
use std::sync::{Arc, Mutex};

fn rooms_resource() -> Arc<ResourceSpec> {
    Arc::new(ResourceSpec::new("rooms", "/v1/Rooms", "rooms"))
}

fn two_page_fetcher() -> Arc<StubFetcher> {
    Arc::new(
        StubFetcher::new()
            .first(json!({
                "rooms": [{"sid": "RM1"}, {"sid": "RM2"}],
                "meta": {"next_page_url": "https://api.example.com/p2"}
            }))
            .url(
                "https://api.example.com/p2",
                json!({
                    "rooms": [{"sid": "RM3"}, {"sid": "RM4"}],
                    "meta": {"next_page_url": null}
                }),
            ),
    )
}

async fn open_stream(
    fetcher: Arc<StubFetcher>,
    limit: Option<usize>,
) -> RecordStream {
    let cursor = Cursor::start(
        fetcher,
        rooms_resource(),
        PageRequest::query(PageQuery::new("/v1/Rooms")),
        limit,
    )
    .await
    .unwrap();
    RecordStream::new(cursor)
}

fn collector() -> (Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    (seen.clone(), seen)
}

// ============================================================================
// Pull Tests
// ============================================================================

#[tokio::test]
async fn test_next_preserves_page_then_array_order() {
    let mut stream = open_stream(two_page_fetcher(), None).await;

    let mut sids = Vec::new();
    while let Some(record) = stream.next().await {
        sids.push(record.unwrap().get_str("sid").unwrap().to_string());
    }

    assert_eq!(sids, vec!["RM1", "RM2", "RM3", "RM4"]);
    assert_eq!(stream.state(), StreamState::Exhausted);
}

#[tokio::test]
async fn test_next_is_idempotent_after_terminal() {
    let mut stream = open_stream(two_page_fetcher(), Some(1)).await;

    assert!(stream.next().await.is_some());
    assert!(stream.next().await.is_none());
    assert!(stream.next().await.is_none());
    assert_eq!(stream.state(), StreamState::LimitReached);
}

#[tokio::test]
async fn test_next_yields_fetch_error_exactly_once() {
    let fetcher = Arc::new(
        StubFetcher::new()
            .first(json!({
                "rooms": [{"sid": "RM1"}],
                "meta": {"next_page_url": "https://api.example.com/p2"}
            }))
            .respond("https://api.example.com/p2", 500, "boom"),
    );
    let mut stream = open_stream(fetcher, None).await;

    assert!(stream.next().await.unwrap().is_ok());
    assert!(stream.next().await.unwrap().is_err());
    assert!(stream.next().await.is_none());
    assert_eq!(stream.state(), StreamState::Errored);
}

// ============================================================================
// Run (push) Tests
// ============================================================================

#[tokio::test]
async fn test_run_delivers_everything_then_exhausted() {
    let stream = open_stream(two_page_fetcher(), None).await;
    let (seen, sink) = collector();

    let outcome = stream
        .run(move |record| {
            let sink = sink.clone();
            async move {
                sink.lock()
                    .unwrap()
                    .push(record.get_str("sid").unwrap().to_string());
                Ok(StreamControl::Continue)
            }
        })
        .await
        .unwrap();

    assert_eq!(outcome, StreamOutcome::Exhausted);
    assert_eq!(*seen.lock().unwrap(), vec!["RM1", "RM2", "RM3", "RM4"]);
}

#[tokio::test]
async fn test_run_honors_limit_exactly() {
    let fetcher = two_page_fetcher();
    let stream = open_stream(fetcher.clone(), Some(3)).await;
    let (seen, sink) = collector();

    let outcome = stream
        .run(move |record| {
            let sink = sink.clone();
            async move {
                sink.lock()
                    .unwrap()
                    .push(record.get_str("sid").unwrap().to_string());
                Ok(StreamControl::Continue)
            }
        })
        .await
        .unwrap();

    assert_eq!(outcome, StreamOutcome::LimitReached);
    assert_eq!(*seen.lock().unwrap(), vec!["RM1", "RM2", "RM3"]);
    // p2 was the final fetch; nothing was requested past it
    assert_eq!(fetcher.fetch_count(), 2);
}

#[tokio::test]
async fn test_run_stop_cancels_without_further_fetches() {
    let fetcher = two_page_fetcher();
    let stream = open_stream(fetcher.clone(), None).await;
    let (seen, sink) = collector();

    let outcome = stream
        .run(move |record| {
            let sink = sink.clone();
            async move {
                sink.lock()
                    .unwrap()
                    .push(record.get_str("sid").unwrap().to_string());
                Ok(StreamControl::Stop)
            }
        })
        .await
        .unwrap();

    assert_eq!(outcome, StreamOutcome::Cancelled);
    assert_eq!(*seen.lock().unwrap(), vec!["RM1"]);
    assert_eq!(fetcher.fetch_count(), 1);
}

#[tokio::test]
async fn test_run_handler_error_surfaces_exactly_once() {
    let fetcher = two_page_fetcher();
    let stream = open_stream(fetcher.clone(), None).await;
    let (seen, sink) = collector();

    let err = stream
        .run(move |record| {
            let sink = sink.clone();
            async move {
                let sid = record.get_str("sid").unwrap().to_string();
                if sid == "RM2" {
                    return Err(Error::handler("cannot archive RM2"));
                }
                sink.lock().unwrap().push(sid);
                Ok(StreamControl::Continue)
            }
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Handler { .. }));
    assert_eq!(*seen.lock().unwrap(), vec!["RM1"]);
    // delivery stopped inside the first page
    assert_eq!(fetcher.fetch_count(), 1);
}

#[tokio::test]
async fn test_run_fetch_error_after_partial_delivery() {
    let fetcher = Arc::new(
        StubFetcher::new()
            .first(json!({
                "rooms": [{"sid": "RM1"}, {"sid": "RM2"}],
                "meta": {"next_page_url": "https://api.example.com/p2"}
            }))
            .respond("https://api.example.com/p2", 502, "bad gateway"),
    );
    let stream = open_stream(fetcher, None).await;
    let (seen, sink) = collector();

    let err = stream
        .run(move |record| {
            let sink = sink.clone();
            async move {
                sink.lock()
                    .unwrap()
                    .push(record.get_str("sid").unwrap().to_string());
                Ok(StreamControl::Continue)
            }
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(502));
    // the first page had already been delivered before the failure
    assert_eq!(*seen.lock().unwrap(), vec!["RM1", "RM2"]);
}

#[tokio::test]
async fn test_run_skips_empty_middle_page() {
    let fetcher = Arc::new(
        StubFetcher::new()
            .first(json!({
                "rooms": [{"sid": "RM1"}],
                "meta": {"next_page_url": "https://api.example.com/p2"}
            }))
            .url(
                "https://api.example.com/p2",
                json!({
                    "rooms": [],
                    "meta": {"next_page_url": "https://api.example.com/p3"}
                }),
            )
            .url(
                "https://api.example.com/p3",
                json!({
                    "rooms": [{"sid": "RM9"}],
                    "meta": {"next_page_url": null}
                }),
            ),
    );
    let stream = open_stream(fetcher, None).await;
    let (seen, sink) = collector();

    let outcome = stream
        .run(move |record| {
            let sink = sink.clone();
            async move {
                sink.lock()
                    .unwrap()
                    .push(record.get_str("sid").unwrap().to_string());
                Ok(StreamControl::Continue)
            }
        })
        .await
        .unwrap();

    assert_eq!(outcome, StreamOutcome::Exhausted);
    assert_eq!(*seen.lock().unwrap(), vec!["RM1", "RM9"]);
}

// ============================================================================
// futures::Stream Adapter Tests
// ============================================================================

#[tokio::test]
async fn test_into_stream_collects_in_order() {
    let stream = open_stream(two_page_fetcher(), Some(3)).await;

    let sids: Vec<String> = stream
        .into_stream()
        .map(|r| r.unwrap().get_str("sid").unwrap().to_string())
        .collect()
        .await;

    assert_eq!(sids, vec!["RM1", "RM2", "RM3"]);
}
