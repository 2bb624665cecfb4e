//! Status service endpoints
//!
//! Both operations log in first and present the fresh token as a bearer
//! credential. No token outlives the call that fetched it.

use chronos_core::domain::config::Config;
use chronos_core::dto::job::{CustomStatusRequest, JobArgsResponse};
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{ChronosClient, endpoint};

impl ChronosClient {
    /// Fetch the arguments this job instance was launched with
    ///
    /// Calls `GET {chronosURL}/v1/getargs/instanceid/{instanceID}` and
    /// returns the `args` string verbatim.
    ///
    /// # Example
    /// ```no_run
    /// # use chronos_client::{ChronosClient, Config};
    /// # async fn example(config: Config) -> anyhow::Result<()> {
    /// let client = ChronosClient::new();
    /// let args = client.fetch_job_args(&config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_job_args(&self, config: &Config) -> Result<String> {
        let token = self.authenticate(config).await?;

        let url = endpoint(
            &config.chronos_url,
            &["v1", "getargs", "instanceid", config.instance_id.as_str()],
        )?;
        debug!("Fetching job args for instance {}", config.instance_id);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header(AUTHORIZATION, token.bearer_header())
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let args: JobArgsResponse = Self::decode_response(response).await?;

        Ok(args.args)
    }

    /// Publish a custom status for this job instance
    ///
    /// Posts `{"instance_id": ..., "status": ...}` to
    /// `{chronosURL}/v1/jobcustomstatus`. The service currently answers with
    /// an empty body; any JSON it does return is discarded.
    pub async fn update_job_status(&self, config: &Config, status: &str) -> Result<()> {
        let token = self.authenticate(config).await?;

        let url = endpoint(&config.chronos_url, &["v1", "jobcustomstatus"])?;
        debug!("Updating status of instance {}: {}", config.instance_id, status);

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(AUTHORIZATION, token.bearer_header())
            .json(&CustomStatusRequest {
                instance_id: config.instance_id.clone(),
                status: status.to_string(),
            })
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }

        serde_json::from_slice::<serde_json::Value>(&body).map_err(ClientError::Decode)?;
        Ok(())
    }
}
