use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Open,
    Closed,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Rejected,
    Hired,
}

/// Maps free-text ATS job states onto the unified set. Rules are checked in
/// order and the first hit wins.
pub fn normalize_job_status(status: Option<&str>) -> JobStatus {
    let Some(status) = status.filter(|s| !s.is_empty()) else {
        return JobStatus::Open;
    };
    let status = status.to_lowercase();
    if status.contains("draft") {
        JobStatus::Draft
    } else if status.contains("close") || status.contains("archive") {
        JobStatus::Closed
    } else {
        JobStatus::Open
    }
}

pub fn normalize_application_status(status: Option<&str>) -> ApplicationStatus {
    let Some(status) = status.filter(|s| !s.is_empty()) else {
        return ApplicationStatus::Applied;
    };
    let status = status.to_lowercase();
    if status.contains("screen") || status.contains("review") {
        ApplicationStatus::Screening
    } else if status.contains("reject") || status.contains("fail") {
        ApplicationStatus::Rejected
    } else if status.contains("hire") || status.contains("offer_accepted") {
        ApplicationStatus::Hired
    } else {
        ApplicationStatus::Applied
    }
}

/// First alternative that is present and non-empty.
pub fn coalesce<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Splits a full name at its first space. Everything after that space,
/// including further spaces, is the last name.
pub fn split_name(full_name: &str) -> (String, String) {
    match full_name.trim().split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full_name.trim().to_string(), String::new()),
    }
}
