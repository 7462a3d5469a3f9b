//! Centralized constants for the stailf workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds. Bounds every single REST call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Streaming Defaults
// =============================================================================

/// Base delay between polls that returned no new results, in milliseconds.
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 500;

/// Largest exponent applied to the backoff base (500ms * 2^4 = 8s).
pub const DEFAULT_MAX_BACKOFF_EXPONENT: u32 = 4;

/// Capacity of the queue between the polling task and the consumer.
pub const DEFAULT_STREAM_CHANNEL_CAPACITY: usize = 16;

// =============================================================================
// Search Job Defaults
// =============================================================================

/// Suffix appended to generated search job identifiers.
pub const DEFAULT_JOB_ID_SUFFIX: &str = "stailf";

/// Inactivity timeout (seconds) requested for real-time jobs.
pub const DEFAULT_REALTIME_JOB_TIMEOUT_SECS: u64 = 60;

/// Seconds of consumer inactivity after which Splunk auto-cancels a job.
pub const DEFAULT_AUTO_CANCEL_SECS: u64 = 60;

// =============================================================================
// Output Defaults
// =============================================================================

/// Default delay between printed records in milliseconds.
pub const DEFAULT_OUTPUT_DELAY_MS: u64 = 10;
