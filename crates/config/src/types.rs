//! Configuration types.
//!
//! Responsibilities:
//! - Define the authentication strategies (session key, username/password).
//! - Define connection settings and the top-level `Config`.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader`).
//! - The login flow itself (see the client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// A session key obtained out-of-band; no login round-trip is needed.
    SessionKey { key: SecretString },
    /// Username and password, exchanged for a session key at login.
    Credentials {
        username: String,
        password: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}

/// Connection configuration for a Splunk server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk management port (e.g., https://localhost:8089)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:8089".to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Returns true when the configuration carries a pre-established session key.
    pub fn is_pre_authenticated(&self) -> bool {
        matches!(self.auth.strategy, AuthStrategy::SessionKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_not_exposed_in_debug() {
        let strategy = AuthStrategy::SessionKey {
            key: SecretString::new("very-secret-session".to_string().into()),
        };
        let debug_output = format!("{:?}", strategy);
        assert!(!debug_output.contains("very-secret-session"));
        assert!(debug_output.contains("SessionKey"));
    }

    #[test]
    fn test_password_not_exposed_in_debug_but_username_is() {
        let strategy = AuthStrategy::Credentials {
            username: "admin".to_string(),
            password: SecretString::new("hunter2".to_string().into()),
        };
        let debug_output = format!("{:?}", strategy);
        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("admin"));
    }

    #[test]
    fn test_is_pre_authenticated() {
        let config = Config {
            connection: ConnectionConfig::default(),
            auth: AuthConfig {
                strategy: AuthStrategy::SessionKey {
                    key: SecretString::new("k".to_string().into()),
                },
            },
        };
        assert!(config.is_pre_authenticated());
        assert_eq!(config.connection.timeout, Duration::from_secs(10));
    }
}
