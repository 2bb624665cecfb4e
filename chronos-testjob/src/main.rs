//! Chronos Test Job
//!
//! A sample long-running job built on the Chronos SDK.
//!
//! - Loads the job configuration from the JSON file given on the command line
//! - Seeds a counter from the `counterInit` job argument
//! - Reports the counter as a custom status on a fixed interval
//!
//! After the configured duration the reporter is stopped and the job exits.

mod counter;
mod reporter;
#[cfg(test)]
mod testing;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chronos_client::{ChronosClient, JobStatusApi};
use chronos_core::domain::config::Config;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::counter::initial_counter;
use crate::reporter::StatusReporter;

#[derive(Parser)]
#[command(name = "chronos-testjob")]
#[command(about = "Test job reporting a counter to Chronos", long_about = None)]
struct Cli {
    /// Path to the job's config.json
    config: PathBuf,

    /// Milliseconds between status updates
    #[arg(long, env = "CHRONOS_STATUS_INTERVAL_MS", default_value_t = 250)]
    interval_ms: u64,

    /// Milliseconds to keep reporting before exiting
    #[arg(long, env = "CHRONOS_RUN_DURATION_MS", default_value_t = 3300)]
    duration_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronos_testjob=info,chronos_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.interval_ms == 0 {
        anyhow::bail!("--interval-ms must be greater than 0");
    }

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    info!(
        "Loaded configuration: instance_id={}, chronos_url={}",
        config.instance_id, config.chronos_url
    );

    let api: Arc<dyn JobStatusApi> = Arc::new(ChronosClient::new());
    let config = Arc::new(config);

    let counter = initial_counter(api.as_ref(), &config).await;

    let reporter = StatusReporter::new(
        Arc::clone(&api),
        Arc::clone(&config),
        Duration::from_millis(cli.interval_ms),
    );
    let handle = reporter.spawn(counter);

    tokio::time::sleep(Duration::from_millis(cli.duration_ms)).await;

    let final_counter = handle.stop().await?;
    info!("Stopped reporting at counter {}", final_counter);

    Ok(())
}
