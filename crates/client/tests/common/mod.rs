//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Stream tests use millisecond backoff bases so they finish quickly on real time
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::collections::HashMap;
use std::time::Duration;

#[allow(unused_imports)]
pub use stailf_client::testing::{events_page, load_fixture};

#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use stailf_client::{AuthStrategy, ClientError, SearchParams, SplunkClient, StreamConfig};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_KEY: &str = "test-session-key-12345678";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "testpassword";

/// Client that is already authenticated with [`SESSION_KEY`].
#[allow(dead_code)]
pub fn session_client(base_url: &str) -> SplunkClient {
    SplunkClient::builder()
        .base_url(base_url.to_string())
        .auth_strategy(AuthStrategy::SessionKey {
            key: SecretString::new(SESSION_KEY.to_string().into()),
        })
        .stream_config(fast_stream_config())
        .build()
        .expect("client should build")
}

/// Client holding [`USERNAME`]/[`PASSWORD`] and no session yet.
#[allow(dead_code)]
pub fn credentials_client(base_url: &str) -> SplunkClient {
    SplunkClient::builder()
        .base_url(base_url.to_string())
        .auth_strategy(AuthStrategy::Credentials {
            username: USERNAME.to_string(),
            password: SecretString::new(PASSWORD.to_string().into()),
        })
        .stream_config(fast_stream_config())
        .build()
        .expect("client should build")
}

/// Backoff of 10ms, 20ms, 40ms then 40ms.
#[allow(dead_code)]
pub fn fast_stream_config() -> StreamConfig {
    StreamConfig {
        backoff_base: Duration::from_millis(10),
        max_backoff_exponent: 2,
        channel_capacity: 4,
    }
}

/// Decode an `application/x-www-form-urlencoded` request body.
#[allow(dead_code)]
pub fn form_fields(request: &wiremock::Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

/// Requests the server has seen whose path ends with `suffix`, in order.
#[allow(dead_code)]
pub async fn requests_to(server: &MockServer, suffix: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path().ends_with(suffix))
        .collect()
}

/// `offset` query values of every events request the server has seen, in order.
#[allow(dead_code)]
pub async fn requested_offsets(server: &MockServer) -> Vec<u64> {
    requests_to(server, "/events")
        .await
        .iter()
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "offset")
                .and_then(|(_, v)| v.parse().ok())
        })
        .collect()
}
