//! Auth service login

use chronos_core::domain::config::Config;
use chronos_core::domain::token::SessionToken;
use chronos_core::dto::auth::{LoginRequest, LoginResponse};
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::{ChronosClient, endpoint};

impl ChronosClient {
    /// Exchange the configured credentials for a bearer token
    ///
    /// Posts `{"Type": "Server"}` to `{authManagerURL}/v1/login/` with a
    /// Basic header built from `appkey:appsecret`. Only a 200 is accepted.
    ///
    /// The returned token is not stored anywhere; privileged operations call
    /// this again every time.
    pub async fn authenticate(&self, config: &Config) -> Result<SessionToken> {
        let url = endpoint(&config.auth_manager_url, &["v1", "login", ""])?;
        debug!("Logging in at {}", url);

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(AUTHORIZATION, config.credentials.basic_auth_header())
            .json(&LoginRequest::server())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Login rejected with status {}", status);
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unauthorized".to_string());
            return Err(ClientError::from_status(status.as_u16(), message));
        }

        let login: LoginResponse = Self::decode_response(response).await?;
        Ok(SessionToken::new(login.token))
    }
}
