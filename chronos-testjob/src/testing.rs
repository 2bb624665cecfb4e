//! In-memory status API for tests

use std::sync::Mutex;

use async_trait::async_trait;
use chronos_client::{ClientError, JobStatusApi, Result};
use chronos_core::domain::config::Config;
use chronos_core::domain::credentials::Credentials;

pub fn sample_config() -> Config {
    Config::new(
        Credentials::new("key", "secret"),
        "http://auth.invalid",
        "http://chronos.invalid",
        "inst-1",
    )
}

/// Records every status it is sent
pub struct FakeApi {
    args: Option<String>,
    statuses: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_args(args: &str) -> Self {
        Self {
            args: Some(args.to_string()),
            statuses: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the service rejected the credentials
    pub fn failing() -> Self {
        Self {
            args: None,
            statuses: Mutex::new(Vec::new()),
        }
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    fn rejected() -> ClientError {
        ClientError::from_status(401, "Unauthorized")
    }
}

#[async_trait]
impl JobStatusApi for FakeApi {
    async fn fetch_job_args(&self, _config: &Config) -> Result<String> {
        self.args.clone().ok_or_else(Self::rejected)
    }

    async fn update_job_status(&self, _config: &Config, status: &str) -> Result<()> {
        self.statuses.lock().unwrap().push(status.to_string());
        match self.args {
            Some(_) => Ok(()),
            None => Err(Self::rejected()),
        }
    }
}
