//! Continuous event streaming for a submitted search job.
//!
//! # What this module handles:
//! - The polling loop that advances a cursor through a job's events
//! - Backoff between polls that return nothing new
//! - Delivery of batches to the consumer over a bounded queue
//!
//! # What this module does NOT handle:
//! - Single fetches (see [`crate::SplunkClient::fetch_events`])
//! - Job cancellation on the server (see [`crate::SplunkClient::cancel_search`])
//!
//! # Invariants
//! - The cursor starts at 0, only moves forward, and moves by exactly the
//!   number of records delivered.
//! - Batches are delivered in cursor order and never overlap.
//! - No fetch starts after shutdown is observed.
//! - The stream ends exactly once: after a shutdown, after the first error,
//!   or when the consumer drops it.

mod backoff;
mod shutdown;

pub use backoff::Backoff;
pub use shutdown::ShutdownSignal;

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use stailf_config::constants::{
    DEFAULT_BACKOFF_BASE_MS, DEFAULT_MAX_BACKOFF_EXPONENT, DEFAULT_STREAM_CHANNEL_CAPACITY,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::SplunkClient;
use crate::error::ClientError;
use crate::models::ResultBatch;

/// One element of an [`EventStream`].
pub type StreamItem = Result<ResultBatch, ClientError>;

/// Tuning for the streaming loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Delay after the first empty poll.
    pub backoff_base: Duration,
    /// Cap on the backoff exponent.
    pub max_backoff_exponent: u32,
    /// Batches buffered ahead of the consumer before polling pauses.
    pub channel_capacity: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            backoff_base: Duration::from_millis(DEFAULT_BACKOFF_BASE_MS),
            max_backoff_exponent: DEFAULT_MAX_BACKOFF_EXPONENT,
            channel_capacity: DEFAULT_STREAM_CHANNEL_CAPACITY,
        }
    }
}

impl StreamConfig {
    fn backoff(&self) -> Backoff {
        Backoff::new(self.backoff_base, self.max_backoff_exponent)
    }
}

/// Batches of new records for one search job.
///
/// Yields `Ok(batch)` for every non-empty poll. An `Err` is always the last
/// item. The stream ends after [`SplunkClient::shutdown`] or an error.
/// Dropping it stops the polling task.
#[derive(Debug)]
pub struct EventStream {
    rx: mpsc::Receiver<StreamItem>,
    task: JoinHandle<()>,
}

impl EventStream {
    pub(crate) fn spawn(client: SplunkClient, sid: String, config: StreamConfig) -> Self {
        // A zero-capacity channel would panic in mpsc::channel.
        let (tx, rx) = mpsc::channel(config.channel_capacity.max(1));
        let task = tokio::spawn(run(client, sid, config, tx));
        Self { rx, task }
    }

    /// Receive the next batch, or `None` once the stream has ended.
    pub async fn next_batch(&mut self) -> Option<StreamItem> {
        self.rx.recv().await
    }
}

impl Stream for EventStream {
    type Item = StreamItem;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(client: SplunkClient, sid: String, config: StreamConfig, tx: mpsc::Sender<StreamItem>) {
    let shutdown = client.shutdown_signal().clone();
    let mut backoff = config.backoff();
    let mut offset: u64 = 0;

    debug!(sid = %sid, "Event stream started");

    loop {
        if shutdown.is_triggered() {
            debug!(sid = %sid, offset, "Shutdown observed, ending stream");
            break;
        }

        let batch = match client.fetch_events(&sid, offset).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(sid = %sid, offset, error = %e, "Event fetch failed, ending stream");
                let _ = tx.send(Err(e)).await;
                break;
            }
        };

        if batch.is_empty() {
            let delay = backoff.delay();
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    debug!(sid = %sid, offset, "Shutdown during backoff, ending stream");
                    break;
                }
                _ = tokio::time::sleep(delay) => {
                    backoff.record_empty();
                }
            }
            continue;
        }

        offset += batch.len() as u64;
        backoff.reset();

        if tx.send(Ok(batch)).await.is_err() {
            debug!(sid = %sid, "Consumer dropped the stream");
            break;
        }
    }
}
