//! Initial counter
//!
//! The job descriptor's arguments are a JSON object; `counterInit` seeds the
//! counter reported in custom statuses.

use anyhow::{Context, Result};
use chronos_client::JobStatusApi;
use chronos_core::domain::config::Config;
use serde_json::Value;
use tracing::{info, warn};

/// Reads `counterInit` from a job arguments document
///
/// Floats are truncated toward zero.
pub fn parse_counter_init(args: &str) -> Result<i64> {
    let args: Value = serde_json::from_str(args).context("job args are not valid JSON")?;

    let value = args
        .get("counterInit")
        .context("job args have no counterInit")?;

    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .with_context(|| format!("counterInit is not a number: {}", value))
}

/// Fetches the job arguments and derives the starting counter
///
/// Falls back to 0 when the arguments cannot be fetched or parsed.
pub async fn initial_counter(api: &dyn JobStatusApi, config: &Config) -> i64 {
    let args = match api.fetch_job_args(config).await {
        Ok(args) => args,
        Err(e) => {
            warn!("Could not get job args: {}", e);
            return 0;
        }
    };

    match parse_counter_init(&args) {
        Ok(counter) => {
            info!("Counter initialized to {}", counter);
            counter
        }
        Err(e) => {
            warn!("Could not retrieve initial counter value ({:#}), initializing to 0", e);
            0
        }
    }
}
