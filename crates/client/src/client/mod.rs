//! Main Splunk REST API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and session key injection
//! - `jobs`: Search job submission and cancellation
//! - `events`: Event fetching, streaming, and shutdown
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Session key storage (delegated to [`crate::auth::SessionManager`])
//! - The polling loop itself (delegated to [`crate::streaming`])
//!
//! # Invariants
//! - Clones share the HTTP connection pool, the session, and the shutdown
//!   signal. Shutting down any clone stops the streams of all of them.
//! - Calls are never retried; the first failure is returned to the caller.

pub mod builder;
mod events;
mod jobs;
mod session;

use std::sync::Arc;

use crate::auth::{Authorization, SessionManager};
use crate::error::{ClientError, Result};
use crate::streaming::{ShutdownSignal, StreamConfig};

/// Splunk REST API client.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use secrecy::SecretString;
/// use stailf_client::{AuthStrategy, SplunkClient};
///
/// # fn main() -> stailf_client::Result<()> {
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .auth_strategy(AuthStrategy::Credentials {
///         username: "admin".to_string(),
///         password: SecretString::new("changeme".to_string().into()),
///     })
///     .build()?;
/// # let _ = client;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: Arc<SessionManager>,
    pub(crate) shutdown: ShutdownSignal,
    pub(crate) stream_config: StreamConfig,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stream_config(&self) -> &StreamConfig {
        &self.stream_config
    }

    pub(crate) fn shutdown_signal(&self) -> &ShutdownSignal {
        &self.shutdown
    }

    /// Credential for the next request.
    pub(crate) fn authorization(&self) -> Result<Authorization> {
        self.session_manager
            .authorization()
            .ok_or_else(|| ClientError::AuthFailed("no session key or credentials".to_string()))
    }
}
