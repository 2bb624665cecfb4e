//! Status reporter
//!
//! Publishes `Custom status = {counter}` on a fixed interval from a
//! background task, incrementing the counter after every attempt.

use std::sync::Arc;

use anyhow::{Context, Result};
use chronos_client::JobStatusApi;
use chronos_core::domain::config::Config;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant};
use tracing::{debug, info, warn};

/// Status text reported for a counter value
pub fn status_text(counter: i64) -> String {
    format!("Custom status = {}", counter)
}

/// Periodically reports the counter as the job's custom status
pub struct StatusReporter {
    api: Arc<dyn JobStatusApi>,
    config: Arc<Config>,
    interval: Duration,
}

/// Handle to a running reporter task
pub struct ReporterHandle {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<i64>,
}

impl StatusReporter {
    /// Creates a new status reporter
    pub fn new(api: Arc<dyn JobStatusApi>, config: Arc<Config>, interval: Duration) -> Self {
        Self {
            api,
            config,
            interval,
        }
    }

    /// Starts reporting from `counter` in a background task
    ///
    /// The first report goes out one interval after the call.
    pub fn spawn(self, counter: i64) -> ReporterHandle {
        let (shutdown, mut stopped) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut counter = counter;
            let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);

            loop {
                tokio::select! {
                    _ = stopped.changed() => break,
                    _ = ticker.tick() => {
                        let status = status_text(counter);
                        // An in-flight update always runs to completion
                        match self.api.update_job_status(&self.config, &status).await {
                            Ok(()) => info!("Updated custom status to \"{}\"", status),
                            Err(e) => warn!("Failed to update job status: {}", e),
                        }
                        counter += 1;
                    }
                }
            }

            debug!("Status reporter stopped at {}", counter);
            counter
        });

        ReporterHandle { shutdown, handle }
    }
}

impl ReporterHandle {
    /// Stops further reports and returns the final counter
    ///
    /// Waits for an update already in flight.
    pub async fn stop(self) -> Result<i64> {
        // The task may already be gone; the join below reports why
        let _ = self.shutdown.send(true);
        self.handle.await.context("Status reporter task failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, sample_config};

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(5), "Custom status = 5");
        assert_eq!(status_text(-1), "Custom status = -1");
    }

    #[tokio::test]
    async fn test_reports_incrementing_counter() {
        let api = Arc::new(FakeApi::with_args("{}"));
        let reporter = StatusReporter::new(
            api.clone(),
            Arc::new(sample_config()),
            Duration::from_millis(20),
        );

        let handle = reporter.spawn(5);
        tokio::time::sleep(Duration::from_millis(150)).await;
        let final_counter = handle.stop().await.unwrap();

        let statuses = api.statuses();
        assert!(statuses.len() >= 2, "only {} reports", statuses.len());
        for (i, status) in statuses.iter().enumerate() {
            assert_eq!(status, &status_text(5 + i as i64));
        }
        assert_eq!(final_counter, 5 + statuses.len() as i64);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_reporting() {
        let api = Arc::new(FakeApi::failing());
        let reporter = StatusReporter::new(
            api.clone(),
            Arc::new(sample_config()),
            Duration::from_millis(20),
        );

        let handle = reporter.spawn(0);
        tokio::time::sleep(Duration::from_millis(150)).await;
        let final_counter = handle.stop().await.unwrap();

        assert!(api.statuses().len() >= 2);
        assert_eq!(final_counter, api.statuses().len() as i64);
    }

    #[tokio::test]
    async fn test_stop_before_first_tick() {
        let api = Arc::new(FakeApi::with_args("{}"));
        let reporter = StatusReporter::new(
            api.clone(),
            Arc::new(sample_config()),
            Duration::from_secs(60),
        );

        let handle = reporter.spawn(3);
        assert_eq!(handle.stop().await.unwrap(), 3);
        assert!(api.statuses().is_empty());
    }
}
