use std::collections::{BTreeMap, HashMap};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};

/// Invocation payload handed over by the function runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub raw_path: Option<String>,
}

impl InvocationEvent {
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }

    /// Integer query parameter; absent is `None`, garbage is an error.
    pub fn query_i64(&self, key: &str) -> Result<Option<i64>> {
        self.query(key)
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    Error::BadRequest(format!("invalid literal for {}: '{}'", key, raw))
                })
            })
            .transpose()
    }

    /// Parses the body as JSON; a missing or empty body reads as `{}`.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T> {
        let raw = self
            .body
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or("{}");
        Ok(serde_json::from_str(raw)?)
    }
}

/// Response shape the function runtime expects back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            json!({ "error": "SerializationFailed", "message": e.to_string() }).to_string()
        });
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn error(status_code: u16, kind: &str, message: impl Into<String>) -> Self {
        Self::json(
            status_code,
            &json!({ "error": kind, "message": message.into() }),
        )
    }

    pub fn body_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
