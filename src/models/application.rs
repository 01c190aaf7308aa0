use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub const INITIAL_APPLICATION_STATUS: &str = "applied";

/// Link between a candidate and a job as created through
/// `POST /applications`. References are stored as sent and are not checked
/// against existing records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub candidate_id: JsonValue,
    pub job_id: JsonValue,
    pub status: String,
}
