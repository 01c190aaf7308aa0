//! Loosely-typed records as returned by an upstream ATS.
//!
//! Every field is optional because different ATS products name things
//! differently; the unified conversions pick the first usable alternative.
//! Text fields accept any JSON scalar so one odd record cannot fail a list.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::adapter::normalize::coalesce;
use crate::models::candidate::{join_name, ContactPoint};
use crate::models::record_id::RecordId;
use crate::utils::serde_helpers::{lenient_contacts, lenient_nested, lenient_string};

/// Items of a list response, either `{"data": [...]}` or a bare array.
/// A missing or `null` `data` is an empty list.
pub fn list_items<T: DeserializeOwned>(body: JsonValue) -> Result<Vec<T>, serde_json::Error> {
    let items = match body {
        JsonValue::Array(items) => items,
        JsonValue::Object(mut fields) => match fields.remove("data") {
            Some(JsonValue::Array(items)) => items,
            None | Some(JsonValue::Null) => Vec::new(),
            Some(other) => {
                return Err(serde::de::Error::custom(format!(
                    "expected `data` to be a list, got {}",
                    other
                )))
            }
        },
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a list response, got {}",
                other
            )))
        }
    };
    items.into_iter().map(serde_json::from_value).collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtsJob {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub apply_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub careers_url: Option<String>,
}

/// Candidate record, also used for the `candidate` object nested in
/// application listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtsCandidate {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub candidate_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_contacts")]
    pub emails: Option<Vec<ContactPoint>>,
    #[serde(default, deserialize_with = "lenient_contacts")]
    pub phones: Option<Vec<ContactPoint>>,
}

impl AtsCandidate {
    /// `name`, else `"first last"` trimmed.
    pub fn display_name(&self) -> String {
        coalesce([self.name.as_deref()]).unwrap_or_else(|| {
            join_name(self.first_name.as_deref(), self.last_name.as_deref())
        })
    }

    /// `email`, else the first entry of `emails`.
    pub fn primary_email(&self) -> Option<String> {
        coalesce([self.email.as_deref()]).or_else(|| first_value(self.emails.as_deref()))
    }

    /// `id`, else `candidate_id`.
    pub fn created_id(&self) -> Option<String> {
        let id = self.id.as_ref().map(ToString::to_string);
        let fallback = self.candidate_id.as_ref().map(ToString::to_string);
        coalesce([id.as_deref(), fallback.as_deref()])
    }
}

pub fn first_value(points: Option<&[ContactPoint]>) -> Option<String> {
    points
        .and_then(|points| points.first())
        .and_then(|point| point.value.clone())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtsApplication {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub candidate_id: Option<RecordId>,
    #[serde(default)]
    pub job_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_nested")]
    pub candidate: Option<AtsCandidate>,
}

/// Outbound body for creating a candidate in the ATS.
#[derive(Debug, Clone, Serialize)]
pub struct AtsCandidatePayload {
    pub first_name: String,
    pub last_name: String,
    pub emails: Vec<ContactPoint>,
    pub phones: Vec<ContactPoint>,
    pub photo_url: Option<String>,
    pub social_links: Vec<JsonValue>,
    pub cv_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsApplicationPayload<'a> {
    pub candidate_id: &'a str,
    pub job_id: &'a str,
}
