//! Data models for Splunk API requests and responses.

pub mod auth;
pub mod common;
pub mod events;
pub mod jobs;

pub use auth::LoginResponse;
pub use common::{MessageType, SplunkMessage, SplunkMessages};
pub use events::{ResultBatch, SearchResult};
pub use jobs::{SearchMode, SearchParams, SubmitJobResponse};
