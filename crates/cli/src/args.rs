//! CLI argument definitions and parsing.
//!
//! Connection settings come from the environment (see `stailf_config`); the
//! flags here only override them.

use clap::Parser;
use stailf_config::constants::{DEFAULT_JOB_ID_SUFFIX, DEFAULT_OUTPUT_DELAY_MS};

#[derive(Parser, Debug)]
#[command(name = "stailf")]
#[command(about = "Tail a Splunk real-time search from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Environment:\n  SPLUNK_URL        Management URL, e.g. https://localhost:8089 (required)\n  SPLUNK_SESSION    Session key from a previous login\n  SPLUNK_USERNAME   Username, used when SPLUNK_SESSION is unset\n  SPLUNK_PASSWORD   Password, used when SPLUNK_SESSION is unset\n\nExamples:\n  stailf 'index=main error'\n  stailf --delay 0 'search sourcetype=access_combined status>=500'\n"
)]
pub struct Cli {
    /// Output delay (ms) after each event
    #[arg(long, default_value_t = DEFAULT_OUTPUT_DELAY_MS, value_name = "MS")]
    pub delay: u64,

    /// Suffix appended to the generated search job id
    #[arg(long, default_value = DEFAULT_JOB_ID_SUFFIX)]
    pub suffix: String,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long)]
    pub skip_verify: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Search query; `search ` is prepended when missing
    pub query: String,
}
