//! Splunk search job tailing client.
//!
//! This crate submits a search as an asynchronous Splunk search job and then
//! polls the job's events endpoint, delivering newly produced records to the
//! caller in order until shutdown or the first error. It supports both
//! pre-established session keys and username/password login.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod job_id;
pub mod models;
mod serde_helpers;
pub mod streaming;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthStrategy, Authorization, SessionManager};
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use error::{ClientError, Result};
pub use models::{ResultBatch, SearchMode, SearchParams, SearchResult, SplunkMessage};
pub use streaming::{Backoff, EventStream, ShutdownSignal, StreamConfig, StreamItem};

/// Redact a search query for logging.
///
/// Keeps the leading command word and the overall length so logs stay useful
/// without recording search terms that may contain tokens or personal data.
pub fn redact_query(query: &str) -> String {
    let trimmed = query.trim();
    let head = trimmed.split_whitespace().next().unwrap_or("");
    format!("{} <{} chars redacted>", head, trimmed.len().saturating_sub(head.len()))
}
