//! Job completion callback domain types

use serde::{Deserialize, Serialize};

/// Completion notice pushed by Chronos to a job's callback URL.
///
/// Every field is optional on the wire; absent values decode to empty
/// strings and zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobCallback {
    pub job_id: String,
    pub job_name: String,
    pub job_container_id: String,
    pub job_instance_id: String,
    pub state: i64,
    pub status: i64,
    pub status_description: String,
}
