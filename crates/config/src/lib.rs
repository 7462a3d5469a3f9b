//! Configuration for the stailf workspace.
//!
//! This crate provides the shared constants and the environment-driven
//! loader used to build a Splunk connection configuration.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
