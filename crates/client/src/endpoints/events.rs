//! Event retrieval endpoint.

use reqwest::Client;
use tracing::trace;

use crate::auth::Authorization;
use crate::endpoints::{encode_path_segment, read_json, send_request};
use crate::error::Result;
use crate::models::ResultBatch;

/// Fetch the records of a job starting at `offset`.
///
/// The returned batch's `offset` is always the requested one, whatever the
/// body's `init_offset` says, so callers can rely on it to advance a cursor.
pub async fn get_events(
    client: &Client,
    base_url: &str,
    auth: &Authorization,
    sid: &str,
    offset: u64,
) -> Result<ResultBatch> {
    trace!(sid, offset, "Fetching events");

    let url = format!(
        "{}/services/search/jobs/{}/events",
        base_url,
        encode_path_segment(sid)
    );
    let builder = client
        .get(&url)
        .query(&[("offset", offset.to_string().as_str()), ("output_mode", "json")]);
    let response = send_request(builder, auth).await?;

    let mut batch: ResultBatch = read_json(response).await?;
    batch.offset = offset;
    Ok(batch)
}
