//! Application credentials

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Application key and secret issued for a job.
///
/// Exchanged for a bearer token on every privileged call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub appkey: String,
    pub appsecret: String,
}

impl Credentials {
    pub fn new(appkey: impl Into<String>, appsecret: impl Into<String>) -> Self {
        Self {
            appkey: appkey.into(),
            appsecret: appsecret.into(),
        }
    }

    /// Base64 of `appkey:appsecret`, the value carried by the Basic scheme
    pub fn basic_token(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.appkey, self.appsecret))
    }

    /// Full `Authorization` header value for the login call
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", self.basic_token())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("appkey", &self.appkey)
            .field("appsecret", &"[REDACTED]")
            .finish()
    }
}
