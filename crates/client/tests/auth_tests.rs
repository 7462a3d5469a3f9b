//! Authentication and session tests.
//!
//! # Invariants
//! - Before login, requests carry HTTP Basic credentials
//! - After login or key injection, requests carry `Authorization: Splunk <key>`
//!
//! # What this does NOT handle
//! - Error message extraction (see error_tests.rs)

mod common;

use common::*;
use wiremock::matchers::{basic_auth, header, method, path};

#[tokio::test]
async fn test_login_stores_session_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = credentials_client(&mock_server.uri());
    assert!(!client.has_session());

    client.login().await.unwrap();
    assert!(client.has_session());

    let requests = requests_to(&mock_server, "/services/auth/login").await;
    let form = form_fields(&requests[0]);
    assert_eq!(form.get("username").map(String::as_str), Some(USERNAME));
    assert_eq!(form.get("password").map(String::as_str), Some(PASSWORD));
    assert_eq!(form.get("output_mode").map(String::as_str), Some("json"));
}

#[tokio::test]
async fn test_requests_after_login_use_session_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(header("Authorization", format!("Splunk {}", SESSION_KEY).as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = credentials_client(&mock_server.uri());
    client.login().await.unwrap();

    let sid = client
        .submit_search("*", "stailf", &SearchParams::realtime())
        .await
        .unwrap();
    assert_eq!(sid, "rt_0123456789.stailf");
}

#[tokio::test]
async fn test_basic_auth_before_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/abc/control"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = credentials_client(&mock_server.uri());
    client.cancel_search("abc").await.unwrap();
}

#[tokio::test]
async fn test_injected_session_key_skips_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/abc/events"))
        .and(header("Authorization", "Splunk injected-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("events/events_single.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = credentials_client(&mock_server.uri());
    client.set_session_key(SecretString::new("injected-key".to_string().into()));
    assert!(client.has_session());

    let batch = client.fetch_events("abc", 0).await.unwrap();
    assert_eq!(batch.len(), 1);
}

#[tokio::test]
async fn test_invalid_session_key_is_not_retried_with_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/abc/events"))
        .respond_with(ResponseTemplate::new(401).set_body_json(load_fixture("auth/login_invalid_creds.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = credentials_client(&mock_server.uri());
    client.set_session_key(SecretString::new("expired".to_string().into()));

    let err = client.fetch_events("abc", 0).await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));

    let requests = requests_to(&mock_server, "/events").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers.get("authorization").and_then(|v| v.to_str().ok()),
        Some("Splunk expired")
    );
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(load_fixture("auth/login_invalid_creds.json")))
        .mount(&mock_server)
        .await;

    let client = credentials_client(&mock_server.uri());
    let err = client.login().await.unwrap_err();

    assert_eq!(err.to_string(), "Login failed");
    assert!(err.is_auth_error());
    assert!(!client.has_session());
}

#[tokio::test]
async fn test_login_without_credentials_fails_locally() {
    let mock_server = MockServer::start().await;

    let client = session_client(&mock_server.uri());
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ClientError::AuthFailed(_)));
    assert!(requests_to(&mock_server, "/services/auth/login").await.is_empty());
}

#[tokio::test]
async fn test_login_response_without_key_is_invalid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"messages": []})))
        .mount(&mock_server)
        .await;

    let client = credentials_client(&mock_server.uri());
    let err = client.login().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
