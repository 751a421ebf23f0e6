//! Record streaming module
//!
//! Delivers records one at a time without materializing the result set.
//!
//! # Overview
//!
//! `RecordStream` is a pull-based iterator over a [`Cursor`]: awaiting
//! [`RecordStream::next`] is the acknowledgment that the previous record has
//! been consumed, so at most one record is ever in flight. The [`run`]
//! driver layers push-style delivery on top: it awaits the handler's future
//! before pulling again, which gives handlers natural backpressure — a
//! handler that takes a minute per record suspends the whole traversal for
//! a minute, with no further page fetched in the meantime.
//!
//! [`run`]: RecordStream::run

use crate::cursor::Cursor;
use crate::error::Result;
use crate::page::Record;
use futures::Stream;
use std::collections::VecDeque;
use std::future::Future;
use tracing::debug;

/// Handler verdict after each record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamControl {
    /// Deliver the next record
    #[default]
    Continue,
    /// Stop the traversal without error
    Stop,
}

/// How a completed traversal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The collection ran out of pages
    Exhausted,
    /// The configured record limit was reached
    LimitReached,
    /// The handler asked to stop
    Cancelled,
}

/// Lifecycle state of a stream
///
/// Terminal states are final; once reached, `next` returns `None` forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Records are still being delivered
    Running,
    /// All pages consumed
    Exhausted,
    /// Record limit consumed
    LimitReached,
    /// A fetch or handler error ended the stream
    Errored,
    /// The handler stopped the stream
    Cancelled,
}

impl StreamState {
    /// Check whether the stream has ended
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Push/pull iterator over the records of a traversal
///
/// Owns exactly one cursor. Records are delivered in page order, then
/// within-page array order — whatever order the server returned.
pub struct RecordStream {
    cursor: Cursor,
    pending: VecDeque<Record>,
    state: StreamState,
}

impl RecordStream {
    /// Wrap a started cursor
    pub fn new(cursor: Cursor) -> Self {
        let pending = cursor.current().records().to_vec().into();
        Self {
            cursor,
            pending,
            state: StreamState::Running,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Pull the next record
    ///
    /// Returns `None` once the stream is terminal (idempotent). A fetch
    /// error is yielded exactly once, after which the stream is terminal.
    pub async fn next(&mut self) -> Option<Result<Record>> {
        loop {
            if self.state.is_terminal() {
                return None;
            }

            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }

            match self.cursor.advance().await {
                Ok(Some(page)) => {
                    self.pending.extend(page.records().iter().cloned());
                }
                Ok(None) => {
                    self.state = if self.cursor.limit_reached() {
                        StreamState::LimitReached
                    } else {
                        StreamState::Exhausted
                    };
                    debug!("Record stream ended: {:?}", self.state);
                    return None;
                }
                Err(e) => {
                    self.state = StreamState::Errored;
                    return Some(Err(e));
                }
            }
        }
    }

    /// Drive the stream through a handler
    ///
    /// The handler is awaited per record before the next one is pulled.
    /// Returns exactly once: the outcome on success, or the first fetch or
    /// handler error. After a handler error or stop, no further records are
    /// delivered and no further pages are fetched.
    pub async fn run<F, Fut>(mut self, mut on_record: F) -> Result<StreamOutcome>
    where
        F: FnMut(Record) -> Fut,
        Fut: Future<Output = Result<StreamControl>>,
    {
        loop {
            match self.next().await {
                Some(Ok(record)) => match on_record(record).await {
                    Ok(StreamControl::Continue) => {}
                    Ok(StreamControl::Stop) => {
                        self.state = StreamState::Cancelled;
                        debug!("Record stream cancelled by handler");
                        return Ok(StreamOutcome::Cancelled);
                    }
                    Err(e) => {
                        self.state = StreamState::Errored;
                        return Err(e);
                    }
                },
                Some(Err(e)) => return Err(e),
                None => {
                    return Ok(match self.state {
                        StreamState::LimitReached => StreamOutcome::LimitReached,
                        _ => StreamOutcome::Exhausted,
                    });
                }
            }
        }
    }

    /// Adapt into a `futures::Stream` for combinator-style consumption
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> {
        futures::stream::unfold(self, |mut iter| async move {
            iter.next().await.map(|item| (item, iter))
        })
    }
}

impl std::fmt::Debug for RecordStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStream")
            .field("state", &self.state)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
