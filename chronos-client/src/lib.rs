//! Chronos HTTP Client
//!
//! Lets a running job authenticate with the auth service, fetch its launch
//! arguments from Chronos and push custom status updates.
//!
//! The client keeps no session between calls. Every privileged operation
//! performs its own login round-trip and drops the token afterwards, so a
//! single client can be shared freely across tasks.
//!
//! # Example
//!
//! ```no_run
//! use chronos_client::ChronosClient;
//! use chronos_core::domain::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.json")?;
//!     let client = ChronosClient::new();
//!
//!     let args = client.fetch_job_args(&config).await?;
//!     println!("Launched with: {}", args);
//!
//!     client.update_job_status(&config, "warming up").await?;
//!     Ok(())
//! }
//! ```

mod auth;
pub mod error;
mod jobs;

// Re-export commonly used types
pub use chronos_core::domain::config::Config;
pub use chronos_core::domain::token::SessionToken;
pub use error::{ClientError, Result};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

/// Timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Privileged status-service operations, as seen by a job
///
/// Implemented by [`ChronosClient`]; callers depend on this trait so they
/// can be driven by an in-memory fake in tests.
#[async_trait]
pub trait JobStatusApi: Send + Sync {
    /// Fetch the arguments the job instance was launched with
    async fn fetch_job_args(&self, config: &Config) -> Result<String>;

    /// Publish a custom status for the job instance
    async fn update_job_status(&self, config: &Config, status: &str) -> Result<()>;
}

/// HTTP client for the auth and Chronos status services
#[derive(Debug, Clone)]
pub struct ChronosClient {
    /// HTTP client instance
    client: Client,
    /// Per-request timeout
    timeout: Duration,
}

impl ChronosClient {
    /// Create a new client with the default 2 second timeout
    ///
    /// # Example
    /// ```
    /// use chronos_client::ChronosClient;
    ///
    /// let client = ChronosClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// The default timeout is still applied per request.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Read the body and parse it as JSON, then as `T`
    ///
    /// A body that is not JSON at all is a [`ClientError::Decode`]; JSON of
    /// the wrong shape is a [`ClientError::Protocol`].
    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.bytes().await?;
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(ClientError::Decode)?;

        serde_json::from_value(value).map_err(|e| ClientError::Protocol(e.to_string()))
    }

    /// Reject 4xx and 5xx responses from the status service
    ///
    /// Other statuses fall through to body decoding.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), message));
        }

        Ok(response)
    }
}

impl Default for ChronosClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStatusApi for ChronosClient {
    async fn fetch_job_args(&self, config: &Config) -> Result<String> {
        ChronosClient::fetch_job_args(self, config).await
    }

    async fn update_job_status(&self, config: &Config, status: &str) -> Result<()> {
        ChronosClient::update_job_status(self, config, status).await
    }
}

/// Join path segments onto a base URL
///
/// Each segment is percent-encoded on its own, so identifiers containing
/// `/` or spaces stay within one segment. An empty trailing segment
/// produces a trailing slash.
fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid base URL {base_url}: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidRequest(format!("{base_url} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ChronosClient::new();
        assert_eq!(client.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_client_with_custom_timeout() {
        let client = ChronosClient::with_client(Client::new()).with_timeout(Duration::from_millis(500));
        assert_eq!(client.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let url = endpoint("http://localhost:8080", &["v1", "login", ""]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/login/");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let url = endpoint("http://localhost:8080/", &["v1", "jobcustomstatus"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/jobcustomstatus");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("https://api.example.com/chronos/", &["v1", "jobcustomstatus"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/chronos/v1/jobcustomstatus");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = endpoint("http://localhost", &["instanceid", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost/instanceid/a%2Fb%20c");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        let err = endpoint("not a url", &["v1"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));

        let err = endpoint("mailto:ops@example.com", &["v1"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
