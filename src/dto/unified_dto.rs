use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::adapter::normalize::{
    coalesce, normalize_application_status, normalize_job_status, ApplicationStatus, JobStatus,
};
use crate::dto::ats_dto::{first_value, AtsApplication, AtsCandidate, AtsJob};
use crate::models::record_id::RecordId;
use crate::utils::serde_helpers::flexible_id;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidateRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    #[serde(default, deserialize_with = "flexible_id")]
    #[validate(required, length(min = 1))]
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    #[serde(default, deserialize_with = "flexible_id")]
    #[validate(required, length(min = 1))]
    pub candidate_id: Option<String>,
    #[serde(default, deserialize_with = "flexible_id")]
    #[validate(required, length(min = 1))]
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedJob {
    pub id: String,
    pub title: Option<String>,
    pub location: Option<String>,
    pub status: JobStatus,
    pub external_url: Option<String>,
}

impl From<AtsJob> for UnifiedJob {
    fn from(job: AtsJob) -> Self {
        Self {
            id: id_string(job.id.as_ref()),
            title: coalesce([job.title.as_deref(), job.job_title.as_deref()]),
            location: coalesce([
                job.location.as_deref(),
                job.city.as_deref(),
                job.country.as_deref(),
            ]),
            status: normalize_job_status(job.status.as_deref()),
            external_url: coalesce([
                job.url.as_deref(),
                job.apply_url.as_deref(),
                job.careers_url.as_deref(),
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedCandidate {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<AtsCandidate> for UnifiedCandidate {
    fn from(candidate: AtsCandidate) -> Self {
        Self {
            id: id_string(candidate.id.as_ref()),
            name: candidate.display_name(),
            email: candidate.primary_email(),
            phone: first_value(candidate.phones.as_deref()),
        }
    }
}

/// Application as listed through the unified API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedApplication {
    pub id: String,
    pub candidate_name: String,
    pub email: Option<String>,
    pub status: ApplicationStatus,
}

impl From<AtsApplication> for UnifiedApplication {
    fn from(application: AtsApplication) -> Self {
        let candidate = application.candidate.unwrap_or_default();
        Self {
            id: id_string(application.id.as_ref()),
            candidate_name: candidate.display_name(),
            email: candidate.primary_email(),
            status: normalize_application_status(application.status.as_deref()),
        }
    }
}

/// Application as returned after creating one: the candidate/job link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedApplicationLink {
    pub id: String,
    pub candidate_id: String,
    pub job_id: String,
    pub status: ApplicationStatus,
}

impl UnifiedApplicationLink {
    pub fn new(created: &AtsApplication, candidate_id: &str, job_id: &str) -> Self {
        Self {
            id: id_string(created.id.as_ref()),
            candidate_id: candidate_id.to_string(),
            job_id: job_id.to_string(),
            status: normalize_application_status(created.status.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<UnifiedJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<UnifiedCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    pub applications: Vec<UnifiedApplication>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCreatedResponse {
    pub candidate: UnifiedCandidate,
    pub application: UnifiedApplicationLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreatedResponse {
    pub application: UnifiedApplicationLink,
}

fn id_string(id: Option<&RecordId>) -> String {
    id.map(ToString::to_string).unwrap_or_default()
}
