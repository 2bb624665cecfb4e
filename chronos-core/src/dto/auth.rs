//! Auth service DTOs

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Type")]
    pub login_type: String,
}

impl LoginRequest {
    /// Login as a server-side application
    pub fn server() -> Self {
        Self {
            login_type: "Server".to_string(),
        }
    }
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "Token")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_login_body() {
        let body = serde_json::to_value(LoginRequest::server()).unwrap();
        assert_eq!(body, serde_json::json!({ "Type": "Server" }));
    }

    #[test]
    fn test_login_response_requires_string_token() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"Token": "abc"}"#).is_ok());
        assert!(serde_json::from_str::<LoginResponse>(r#"{"Token": 42}"#).is_err());
        assert!(serde_json::from_str::<LoginResponse>(r#"{"token": "abc"}"#).is_err());
    }
}
