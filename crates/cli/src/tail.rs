//! The tail command: submit a real-time search and print its events.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`).
//! - Exit code mapping (see `error`).
//!
//! Invariants:
//! - A signal during streaming cancels the remote job before local polling
//!   stops; cancellation errors are ignored.
//! - A stream error ends the tail and is returned to the caller.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::StreamExt;
use stailf_client::{SearchParams, SplunkClient};
use stailf_config::{
    Config, ConfigLoader,
    constants::{DEFAULT_AUTO_CANCEL_SECS, DEFAULT_REALTIME_JOB_TIMEOUT_SECS},
};
use tracing::{debug, info};

use crate::args::Cli;
use crate::error::ExitCode;
use crate::output::write_record;
use crate::signal::Signals;

/// Build the configuration from the environment plus CLI overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }

    Ok(loader.build()?)
}

/// Parameters of the real-time job a tail submits.
pub fn realtime_params() -> SearchParams {
    SearchParams::realtime()
        .with_timeout(DEFAULT_REALTIME_JOB_TIMEOUT_SECS)
        .with_auto_cancel(DEFAULT_AUTO_CANCEL_SECS)
}

pub async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    let client = SplunkClient::builder().from_config(&config).build()?;
    let mut signals = Signals::install().context("Failed to install signal handlers")?;

    let setup = async {
        if !config.is_pre_authenticated() {
            client.login().await.context("Failed to log in")?;
        }
        client
            .submit_search(&cli.query, &cli.suffix, &realtime_params())
            .await
            .context("Failed to submit search")
    };

    let sid = tokio::select! {
        sid = setup => sid?,
        name = signals.recv() => {
            eprintln!("{} received before the search started", name);
            return Ok(ExitCode::Interrupted);
        }
    };
    info!(sid = %sid, "Tailing search job");

    let stopper = client.clone();
    let stop_sid = sid.clone();
    tokio::spawn(async move {
        let name = signals.recv().await;
        println!("{} received, stopping...", name);
        if let Err(e) = stopper.cancel_search(&stop_sid).await {
            debug!(error = %e, "Ignoring job cancellation failure");
        }
        stopper.shutdown();
    });

    let delay = Duration::from_millis(cli.delay);
    let mut events = client.stream_events(&sid);
    while let Some(item) = events.next().await {
        let batch = item?;
        for record in &batch.results {
            write_record(&mut std::io::stdout().lock(), &record.raw)
                .context("Failed to write to stdout")?;
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    Ok(ExitCode::Success)
}
