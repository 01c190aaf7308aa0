use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::utils::pagination::PageRequest;
use crate::utils::serde_helpers::lenient_i64;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    #[serde(deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub per_page: Option<i64>,
}

impl ListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationListQuery {
    pub job_id: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub per_page: Option<i64>,
}

impl ApplicationListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }

    /// An empty `job_id` means no filter.
    pub fn job_filter(&self) -> Option<String> {
        self.job_id.clone().filter(|id| !id.is_empty())
    }
}

/// Body of `POST /candidates` on the mock ATS. Fields are stored as sent;
/// absent `emails`/`phones` become empty lists, an explicit `null` is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
    #[serde(default)]
    pub first_name: JsonValue,
    #[serde(default)]
    pub last_name: JsonValue,
    #[serde(default = "empty_list")]
    pub emails: JsonValue,
    #[serde(default = "empty_list")]
    pub phones: JsonValue,
    #[serde(default)]
    pub cv_url: JsonValue,
}

impl Default for NewCandidate {
    fn default() -> Self {
        Self {
            first_name: JsonValue::Null,
            last_name: JsonValue::Null,
            emails: empty_list(),
            phones: empty_list(),
            cv_url: JsonValue::Null,
        }
    }
}

fn empty_list() -> JsonValue {
    JsonValue::Array(Vec::new())
}

/// Body of `POST /applications` on the mock ATS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewApplication {
    #[serde(default)]
    pub candidate_id: JsonValue,
    #[serde(default)]
    pub job_id: JsonValue,
}

/// `{"data": [...]}` wrapper used by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for DataResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}
