use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};

use crate::utils::serde_helpers::{lenient_string, value_text};

/// An email address or phone number with its label, e.g. `{"value": .., "type": "work"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl ContactPoint {
    pub fn new(value: impl Into<String>, kind: &str) -> Self {
        Self {
            value: Some(value.into()),
            kind: Some(kind.to_string()),
            extra: Map::new(),
        }
    }

    /// Reads a list entry that may be an object or a bare scalar.
    pub fn from_loose(entry: JsonValue) -> Option<Self> {
        match entry {
            JsonValue::Null => None,
            JsonValue::Object(_) => serde_json::from_value(entry).ok(),
            other => Some(Self {
                value: value_text(&other),
                ..Default::default()
            }),
        }
    }
}

/// Candidate as created through `POST /candidates`. Client-supplied fields
/// are stored exactly as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub first_name: JsonValue,
    pub last_name: JsonValue,
    pub emails: JsonValue,
    pub phones: JsonValue,
    pub cv_url: JsonValue,
}

/// Candidate details attached to an application when listing applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub name: String,
    pub email: JsonValue,
    pub first_name: JsonValue,
    pub last_name: JsonValue,
}

impl CandidateSummary {
    /// Summary of a stored candidate record of any shape. Missing fields
    /// come out as `null`.
    pub fn from_record(record: &JsonValue) -> Self {
        let first = value_text(&record["first_name"]);
        let last = value_text(&record["last_name"]);
        Self {
            name: join_name(first.as_deref(), last.as_deref()),
            email: record["emails"][0]["value"].clone(),
            first_name: record["first_name"].clone(),
            last_name: record["last_name"].clone(),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "name": self.name,
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
        })
    }
}

/// `"first last"` with surrounding whitespace removed; missing parts count as empty.
pub fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_string()
}
