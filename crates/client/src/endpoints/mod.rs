//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP call. Authentication is supplied
//! by the caller as an [`Authorization`](crate::Authorization); these
//! functions never retry.

mod auth;
mod events;
mod jobs;
mod request;
pub mod url_encoding;

pub use auth::login;
pub use events::get_events;
pub use jobs::{cancel_job, submit_job};
pub use request::{discard_body, read_json, send_request};
pub use url_encoding::encode_path_segment;
