//! Client-level session management.
//!
//! # Invariants
//! - `login` requires credentials; a session-key-only client cannot log in.
//! - A stored session key is never replaced by basic credentials.

use secrecy::SecretString;
use tracing::info;

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl SplunkClient {
    /// Exchange the configured username and password for a session key.
    ///
    /// On success the key is stored and used for every later request made
    /// through this client or any of its clones.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the client has no credentials.
    /// Returns [`ClientError::ApiError`] if Splunk rejects the login.
    pub async fn login(&self) -> Result<()> {
        let (username, password) = self.session_manager.credentials().ok_or_else(|| {
            ClientError::AuthFailed("login requires a username and password".to_string())
        })?;
        let auth = self.authorization()?;

        let key = endpoints::login(&self.http, &self.base_url, &auth, username, password).await?;
        self.session_manager.set_session_key(key);

        info!(username, "Logged in to Splunk");
        Ok(())
    }

    /// Inject a session key obtained out-of-band, skipping `login`.
    pub fn set_session_key(&self, key: SecretString) {
        self.session_manager.set_session_key(key);
    }

    /// True once a session key is present.
    pub fn has_session(&self) -> bool {
        self.session_manager.has_session()
    }
}
