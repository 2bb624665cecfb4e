//! Status service DTOs

use serde::{Deserialize, Serialize};

/// Response of `GET /v1/getargs/instanceid/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobArgsResponse {
    /// Caller-defined payload, usually a JSON document encoded as a string
    pub args: String,
}

/// Body of `POST /v1/jobcustomstatus`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomStatusRequest {
    pub instance_id: String,
    pub status: String,
}
