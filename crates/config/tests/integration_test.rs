//! Integration tests for configuration loading.
//!
//! These tests use only builder methods, never the process environment, so
//! they need no serialization.

use proptest::prelude::*;
use secrecy::ExposeSecret;
use stailf_config::{AuthStrategy, ConfigError, ConfigLoader};
use std::time::Duration;

#[test]
fn test_builder_overrides_produce_config() {
    let config = ConfigLoader::new()
        .with_base_url("https://splunk.example.com:8089/".to_string())
        .with_session_key("preset".to_string())
        .with_skip_verify(true)
        .with_timeout(Duration::from_secs(30))
        .build()
        .expect("should build with overrides");

    assert_eq!(config.connection.base_url, "https://splunk.example.com:8089");
    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert!(config.is_pre_authenticated());
}

#[test]
fn test_session_key_wins_over_credentials() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .with_password("changeme".to_string())
        .with_session_key("preset".to_string())
        .build()
        .unwrap();

    match config.auth.strategy {
        AuthStrategy::SessionKey { key } => assert_eq!(key.expose_secret(), "preset"),
        other => panic!("expected session key, got {:?}", other),
    }
}

#[test]
fn test_username_without_password_is_missing_auth() {
    let result = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_non_http_scheme_is_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://localhost:8089".to_string())
        .with_session_key("k".to_string())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref var, .. }) if var == "SPLUNK_URL"
    ));
}

#[test]
fn test_timeout_bounds() {
    let build = |secs| {
        ConfigLoader::new()
            .with_base_url("https://localhost:8089".to_string())
            .with_session_key("k".to_string())
            .with_timeout(Duration::from_secs(secs))
            .build()
    };
    assert!(matches!(build(0), Err(ConfigError::InvalidTimeout { .. })));
    assert!(build(3600).is_ok());
    assert!(matches!(build(3601), Err(ConfigError::InvalidTimeout { .. })));
}

fn base_url_strategy() -> impl Strategy<Value = String> {
    let host = prop_oneof![
        Just("localhost".to_string()),
        "[a-z][a-z0-9-]{0,12}\\.(example\\.com|internal\\.local)",
    ];
    (
        prop_oneof![Just("http"), Just("https")],
        host,
        1u16..=65535u16,
    )
        .prop_map(|(scheme, host, port)| format!("{}://{}:{}", scheme, host, port))
}

proptest! {
    #[test]
    fn prop_trailing_slashes_are_removed(url in base_url_strategy(), slashes in 0usize..4) {
        let raw = format!("{}{}", url, "/".repeat(slashes));
        let config = ConfigLoader::new()
            .with_base_url(raw)
            .with_session_key("k".to_string())
            .build()
            .unwrap();
        prop_assert!(!config.connection.base_url.ends_with('/'));
        prop_assert!(config.connection.base_url.starts_with("http"));
    }
}
