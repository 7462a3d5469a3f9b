//! Authentication strategies and session management.
//!
//! # Invariants
//! - Once a session key is present it is used for every request; basic
//!   credentials are never sent again, even if the key later proves invalid.
//! - The session key is written by `login`/`set_session_key` and otherwise only read.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};
use std::sync::{PoisonError, RwLock};

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password. Sent as HTTP Basic until a session key is
    /// obtained through [`crate::SplunkClient::login`].
    Credentials {
        username: String,
        password: SecretString,
    },
    /// A session key obtained out-of-band (pre-authenticated mode).
    SessionKey { key: SecretString },
}

/// Credential attached to a single outgoing request.
#[derive(Debug, Clone)]
pub enum Authorization {
    /// `Authorization: Splunk <sessionKey>`
    SessionKey(SecretString),
    /// HTTP Basic with username and password.
    Basic {
        username: String,
        password: SecretString,
    },
}

impl Authorization {
    /// Attach this credential to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::SessionKey(key) => builder.header(
                reqwest::header::AUTHORIZATION,
                format!("Splunk {}", key.expose_secret()),
            ),
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
        }
    }
}

/// Owns the credentials and the session key for one client.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Option<(String, SecretString)>,
    session_key: RwLock<Option<SecretString>>,
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        match strategy {
            AuthStrategy::Credentials { username, password } => Self {
                credentials: Some((username, password)),
                session_key: RwLock::new(None),
            },
            AuthStrategy::SessionKey { key } => Self {
                credentials: None,
                session_key: RwLock::new(Some(key)),
            },
        }
    }

    /// Username and password, if this session was configured with them.
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        self.credentials
            .as_ref()
            .map(|(username, password)| (username.as_str(), password))
    }

    /// Store a session key. All later requests authenticate with it.
    pub fn set_session_key(&self, key: SecretString) {
        let mut guard = self
            .session_key
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(key);
    }

    /// True once a session key is present.
    pub fn has_session(&self) -> bool {
        self.session_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Credential for the next request: the session key when present,
    /// otherwise basic credentials. `None` when neither is available.
    pub fn authorization(&self) -> Option<Authorization> {
        let session = self
            .session_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match session {
            Some(key) => Some(Authorization::SessionKey(key)),
            None => self
                .credentials
                .as_ref()
                .map(|(username, password)| Authorization::Basic {
                    username: username.clone(),
                    password: password.clone(),
                }),
        }
    }
}
