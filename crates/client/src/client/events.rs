//! Event fetching, streaming, and shutdown.

use tracing::info;

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ResultBatch;
use crate::streaming::EventStream;

impl SplunkClient {
    /// Fetch the records of `sid` from `offset` onwards, once.
    pub async fn fetch_events(&self, sid: &str, offset: u64) -> Result<ResultBatch> {
        let auth = self.authorization()?;
        endpoints::get_events(&self.http, &self.base_url, &auth, sid, offset).await
    }

    /// Start polling `sid` for new records in a background task.
    ///
    /// Must be called within a Tokio runtime.
    pub fn stream_events(&self, sid: &str) -> EventStream {
        info!(sid, "Streaming events");
        EventStream::spawn(self.clone(), sid.to_string(), self.stream_config.clone())
    }

    /// Stop every stream of this client and its clones. Idempotent.
    ///
    /// Does not cancel any job on the server.
    pub fn shutdown(&self) {
        self.shutdown.trigger();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.is_triggered()
    }
}
