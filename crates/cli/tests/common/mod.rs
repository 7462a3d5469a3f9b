//! Shared test utilities for stailf integration tests.
//!
//! Invariants / Assumptions:
//! - Every command built here is hermetic: `.env` loading is disabled and
//!   host `SPLUNK_*` variables are cleared.
//! - `SPLUNK_SESSION` is set to [`SESSION_KEY`] unless a test removes it.

use assert_cmd::Command;

#[allow(dead_code)]
pub const SESSION_KEY: &str = "test-session";

const HOST_VARS: &[&str] = &[
    "SPLUNK_URL",
    "SPLUNK_SESSION",
    "SPLUNK_USERNAME",
    "SPLUNK_PASSWORD",
    "SPLUNK_SKIP_VERIFY",
    "SPLUNK_TIMEOUT",
];

/// Returns a hermetic `stailf` command.
pub fn stailf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("stailf");
    cmd.env("DOTENV_DISABLED", "1");
    for var in HOST_VARS {
        cmd.env_remove(var);
    }
    cmd.env("SPLUNK_SESSION", SESSION_KEY);
    cmd
}

/// Returns a hermetic `stailf` command pointed at `base_url`.
#[allow(dead_code)]
pub fn stailf_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = stailf_cmd();
    cmd.env("SPLUNK_URL", base_url);
    cmd
}

/// Binary path for tests that need a raw child process.
#[allow(dead_code)]
pub fn stailf_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("stailf")
}
