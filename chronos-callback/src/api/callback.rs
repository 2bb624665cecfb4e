//! Job Callback API Handler
//!
//! Receives job completion notices from Chronos and logs them. Nothing is
//! stored and nothing is validated beyond JSON decoding.

use axum::{body::Bytes, extract::Path, http::StatusCode};
use chronos_core::domain::callback::JobCallback;

/// Decodes a callback body
pub fn decode_callback(body: &[u8]) -> Result<JobCallback, serde_json::Error> {
    serde_json::from_slice(body)
}

/// POST /jobcallback/{id}
///
/// Always answers 200 with an empty body, even when the payload cannot be
/// decoded.
pub async fn job_callback(Path(id): Path<String>, body: Bytes) -> StatusCode {
    let callback = match decode_callback(&body) {
        Ok(callback) => callback,
        Err(e) => {
            tracing::error!("Error decoding callback {}: {}", id, e);
            return StatusCode::OK;
        }
    };

    tracing::info!(
        params_id = %id,
        received_at = %chrono::Utc::now().to_rfc3339(),
        job_id = %callback.job_id,
        job_name = %callback.job_name,
        job_container_id = %callback.job_container_id,
        job_instance_id = %callback.job_instance_id,
        state = callback.state,
        status = callback.status,
        status_description = %callback.status_description,
        "Received job completion"
    );

    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_router;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn post_callback(id: &str, body: &'static str) -> (StatusCode, Bytes) {
        let response = create_router()
            .oneshot(
                Request::post(format!("/jobcallback/{}", id))
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_callback() {
        let (status, body) = post_callback(
            "42",
            r#"{
                "job_id": "j-1",
                "job_name": "nightly",
                "job_container_id": "c-9",
                "job_instance_id": "inst-1",
                "state": 3,
                "status": 0,
                "status_description": "completed"
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_callback_still_ok() {
        let (status, body) = post_callback("42", "not json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_partial_callback_accepted() {
        let (status, _) = post_callback("7", r#"{"job_id": "j-1"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_decode_callback() {
        let callback = decode_callback(br#"{"job_instance_id": "inst-1", "state": 2}"#).unwrap();
        assert_eq!(callback.job_instance_id, "inst-1");
        assert_eq!(callback.state, 2);

        assert!(decode_callback(b"").is_err());
    }
}
