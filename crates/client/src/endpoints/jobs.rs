//! Search job endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::Authorization;
use crate::endpoints::{discard_body, encode_path_segment, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::{SearchParams, SubmitJobResponse};

/// Create a search job under a caller-chosen identifier.
///
/// `query` is sent as given; normalization happens in the client layer.
/// Returns the sid Splunk reports back.
pub async fn submit_job(
    client: &Client,
    base_url: &str,
    auth: &Authorization,
    sid: &str,
    query: &str,
    params: &SearchParams,
) -> Result<String> {
    debug!(sid, "Submitting search job");

    let url = format!("{}/services/search/jobs", base_url);

    let mut form: Vec<(String, String)> = vec![
        ("id".to_string(), sid.to_string()),
        ("search".to_string(), query.to_string()),
        ("output_mode".to_string(), "json".to_string()),
    ];
    form.extend(params.to_form_fields());

    let builder = client.post(&url).form(&form);
    let response = send_request(builder, auth).await?;

    let body: SubmitJobResponse = read_json(response).await?;
    body.into_sid()
        .ok_or_else(|| ClientError::InvalidResponse("Missing sid in response".to_string()))
}

/// Cancel a search job. The response body is not inspected.
pub async fn cancel_job(
    client: &Client,
    base_url: &str,
    auth: &Authorization,
    sid: &str,
) -> Result<()> {
    debug!(sid, "Cancelling search job");

    let url = format!(
        "{}/services/search/jobs/{}/control",
        base_url,
        encode_path_segment(sid)
    );
    let builder = client
        .post(&url)
        .form(&[("action", "cancel"), ("output_mode", "json")]);
    let response = send_request(builder, auth).await?;

    discard_body(response).await
}
