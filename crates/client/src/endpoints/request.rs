//! Request execution and response mapping shared by every endpoint.
//!
//! Any status above 299 becomes [`ClientError::ApiError`] carrying the text
//! of the first message Splunk attached to the body, or
//! [`NO_ERROR_MESSAGE`] when there is none.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::Authorization;
use crate::error::{ClientError, NO_ERROR_MESSAGE, Result};
use crate::models::SplunkMessages;

/// Attach `auth` to the request, send it once, and map failure statuses.
pub async fn send_request(builder: RequestBuilder, auth: &Authorization) -> Result<Response> {
    let response = auth.apply(builder).send().await?;

    if response.status().as_u16() > 299 {
        return Err(error_from_response(response).await?);
    }
    Ok(response)
}

/// Decode a success body as JSON.
///
/// The body is read in full first so that a malformed payload is reported
/// as [`ClientError::InvalidResponse`] rather than a transport error.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().path().to_string();
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
    })
}

/// Drain and drop a success body.
pub async fn discard_body(response: Response) -> Result<()> {
    response.bytes().await?;
    Ok(())
}

/// Build the `ApiError` for a failure status. A body that cannot be read
/// is a transport error, not a service error.
async fn error_from_response(response: Response) -> Result<ClientError> {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response.bytes().await?;

    let message = serde_json::from_slice::<SplunkMessages>(&body)
        .ok()
        .and_then(|m| m.first_text().map(str::to_string))
        .unwrap_or_else(|| NO_ERROR_MESSAGE.to_string());

    debug!(status, url = %url, message = %message, "Splunk returned an error");

    Ok(ClientError::ApiError {
        status,
        url,
        message,
    })
}
