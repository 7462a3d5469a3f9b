//! Search job submission and cancellation.

use tracing::{debug, info};

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::job_id::generate_job_id;
use crate::models::SearchParams;
use crate::redact_query;

/// Prefix Splunk requires on a query given as a search command.
const SEARCH_COMMAND: &str = "search";

/// Prepend `search ` unless the query already starts with it.
pub(crate) fn normalize_query(query: &str) -> String {
    if query.starts_with(SEARCH_COMMAND) {
        query.to_string()
    } else {
        format!("{} {}", SEARCH_COMMAND, query)
    }
}

impl SplunkClient {
    /// Create a search job and return its sid.
    ///
    /// The job id is generated locally (`rt_` prefixed for real-time
    /// parameters, followed by `.{id_suffix}`); every field of `params` is
    /// forwarded unvalidated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::RandomSource`] if no id could be generated;
    /// nothing is sent in that case.
    pub async fn submit_search(
        &self,
        query: &str,
        id_suffix: &str,
        params: &SearchParams,
    ) -> Result<String> {
        let id = generate_job_id(params, id_suffix)?;
        let search = normalize_query(query);
        debug!(id = %id, search = %redact_query(&search), "Creating search job");

        let auth = self.authorization()?;
        let sid =
            endpoints::submit_job(&self.http, &self.base_url, &auth, &id, &search, params).await?;

        info!(sid = %sid, "Search job created");
        Ok(sid)
    }

    /// Ask Splunk to cancel a search job.
    ///
    /// Independent of streaming: call [`SplunkClient::shutdown`] to stop
    /// local polling.
    pub async fn cancel_search(&self, sid: &str) -> Result<()> {
        let auth = self.authorization()?;
        endpoints::cancel_job(&self.http, &self.base_url, &auth, sid).await?;
        info!(sid, "Search job cancelled");
        Ok(())
    }
}
