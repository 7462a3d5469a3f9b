//! Authentication endpoints.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::auth::Authorization;
use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::models::LoginResponse;

/// Exchange username and password for a session key.
pub async fn login(
    client: &Client,
    base_url: &str,
    auth: &Authorization,
    username: &str,
    password: &SecretString,
) -> Result<SecretString> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client.post(&url).form(&[
        ("username", username),
        ("password", password.expose_secret()),
        ("output_mode", "json"),
    ]);
    let response = send_request(builder, auth).await?;

    let body: LoginResponse = read_json(response).await?;
    Ok(body.session_key)
}
