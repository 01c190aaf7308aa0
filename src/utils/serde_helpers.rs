use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::models::candidate::ContactPoint;

/// Query-string integer that falls back to `None` when absent or unparsable.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Accepts an identifier sent either as a JSON string or a JSON number and
/// keeps its string form.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    let raw: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(i) => i.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    }))
}

/// Text form of a JSON value: strings as-is, `null` as `None`, anything else
/// rendered as JSON.
pub fn value_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Free-text field that tolerates numbers, booleans and nested values.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<JsonValue> = Option::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_text))
}

/// Email/phone list. Entries may be `{value, type}` objects or bare
/// scalars; a non-list value reads as absent.
pub fn lenient_contacts<'de, D>(deserializer: D) -> Result<Option<Vec<ContactPoint>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<JsonValue> = Option::deserialize(deserializer)?;
    let Some(JsonValue::Array(items)) = raw else {
        return Ok(None);
    };
    Ok(Some(
        items.into_iter().filter_map(ContactPoint::from_loose).collect(),
    ))
}

/// Nested record that is dropped, rather than failing the parent, when it
/// has an unexpected shape.
pub fn lenient_nested<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<JsonValue> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "flexible_id")]
        job_id: Option<String>,
    }

    #[test]
    fn flexible_id_accepts_strings_and_numbers() {
        let body: Body = serde_json::from_str(r#"{"job_id": 5}"#).unwrap();
        assert_eq!(body.job_id.as_deref(), Some("5"));
        let body: Body = serde_json::from_str(r#"{"job_id": "abc"}"#).unwrap();
        assert_eq!(body.job_id.as_deref(), Some("abc"));
        let body: Body = serde_json::from_str(r#"{"job_id": null}"#).unwrap();
        assert!(body.job_id.is_none());
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.job_id.is_none());
    }

    #[derive(Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "lenient_string")]
        title: Option<String>,
        #[serde(default, deserialize_with = "lenient_contacts")]
        phones: Option<Vec<ContactPoint>>,
    }

    #[test]
    fn lenient_fields_accept_any_scalar() {
        let loose: Loose =
            serde_json::from_value(json!({"title": 2024, "phones": ["+100", {"value": 7}]}))
                .unwrap();
        assert_eq!(loose.title.as_deref(), Some("2024"));
        let phones = loose.phones.unwrap();
        assert_eq!(phones[0].value.as_deref(), Some("+100"));
        assert_eq!(phones[1].value.as_deref(), Some("7"));

        let loose: Loose = serde_json::from_value(json!({"title": null, "phones": null})).unwrap();
        assert!(loose.title.is_none());
        assert!(loose.phones.is_none());
    }
}
