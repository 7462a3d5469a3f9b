//! stailf - tail a Splunk real-time search.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run a single real-time tail via the shared client library.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible.
//! - Logs go to stderr; stdout carries only records and the stop notice.

mod args;
mod error;
mod output;
mod signal;
mod tail;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use stailf_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("[ERROR] Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match tail::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
