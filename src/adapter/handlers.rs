//! Unified job-application API on top of an upstream ATS.
//!
//! Every handler comes in two flavours: `*_with` takes an explicit
//! [`AtsClient`], the plain variant builds one from the environment on each
//! invocation. Errors never escape a handler; they become a 400
//! `ValidationError` or a 500 tagged with the handler's failure kind.

use serde_json::json;
use tracing::{error, info, warn};
use validator::Validate;

use super::envelope::{InvocationEvent, InvocationResponse};
use super::normalize::split_name;
use crate::dto::ats_dto::AtsCandidatePayload;
use crate::dto::unified_dto::{
    ApplicationCreatedResponse, ApplicationsResponse, CandidateCreatedResponse,
    CandidatesResponse, CreateApplicationRequest, CreateCandidateRequest, JobsResponse,
    UnifiedApplication, UnifiedApplicationLink, UnifiedCandidate, UnifiedJob,
};
use crate::error::{Error, Result};
use crate::models::candidate::ContactPoint;
use crate::services::ats_client::AtsClient;

pub const VALIDATION_ERROR: &str = "ValidationError";

/// Tag reported in the `error` field when a handler fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    JobsFetch,
    CandidateCreate,
    CandidatesFetch,
    ApplicationCreate,
    ApplicationsFetch,
}

impl Failure {
    pub fn tag(self) -> &'static str {
        match self {
            Failure::JobsFetch => "JobsFetchFailed",
            Failure::CandidateCreate => "CandidateCreateFailed",
            Failure::CandidatesFetch => "CandidatesFetchFailed",
            Failure::ApplicationCreate => "ApplicationCreateFailed",
            Failure::ApplicationsFetch => "ApplicationsFetchFailed",
        }
    }
}

fn respond(failure: Failure, result: Result<InvocationResponse>) -> InvocationResponse {
    match result {
        Ok(response) => response,
        Err(Error::Validation(message)) => {
            warn!("{} rejected: {}", failure.tag(), message);
            InvocationResponse::error(400, VALIDATION_ERROR, message)
        }
        Err(e) => {
            error!(error = ?e, "{}", failure.tag());
            InvocationResponse::error(500, failure.tag(), e.to_string())
        }
    }
}

fn client_from_env() -> Result<AtsClient> {
    AtsClient::from_env()
}

/// Health check for local function runtimes.
pub fn hello(event: &InvocationEvent) -> InvocationResponse {
    InvocationResponse::json(
        200,
        &json!({
            "Message": "Hello from the ATS adapter",
            "Path": event.raw_path,
        }),
    )
}

/// `GET /jobs`
pub async fn get_jobs(event: &InvocationEvent) -> InvocationResponse {
    let result = match client_from_env() {
        Ok(client) => fetch_jobs(&client, event).await,
        Err(e) => Err(e),
    };
    respond(Failure::JobsFetch, result)
}

pub async fn get_jobs_with(client: &AtsClient, event: &InvocationEvent) -> InvocationResponse {
    respond(Failure::JobsFetch, fetch_jobs(client, event).await)
}

async fn fetch_jobs(client: &AtsClient, event: &InvocationEvent) -> Result<InvocationResponse> {
    let page = event.query_i64("page")?;
    let per_page = event.query_i64("per_page")?;

    let jobs: Vec<UnifiedJob> = client
        .get_jobs(page, per_page)
        .await?
        .into_iter()
        .map(UnifiedJob::from)
        .collect();

    Ok(InvocationResponse::json(200, &JobsResponse { jobs }))
}

/// `POST /candidates`: creates the candidate, then attaches it to `job_id`.
///
/// The two upstream calls are not transactional. If the second one fails
/// the candidate stays in the ATS without an application.
pub async fn create_candidate(event: &InvocationEvent) -> InvocationResponse {
    let result = match client_from_env() {
        Ok(client) => submit_candidate(&client, event).await,
        Err(e) => Err(e),
    };
    respond(Failure::CandidateCreate, result)
}

pub async fn create_candidate_with(
    client: &AtsClient,
    event: &InvocationEvent,
) -> InvocationResponse {
    respond(Failure::CandidateCreate, submit_candidate(client, event).await)
}

async fn submit_candidate(
    client: &AtsClient,
    event: &InvocationEvent,
) -> Result<InvocationResponse> {
    let request: CreateCandidateRequest = event.json_body()?;
    request
        .validate()
        .map_err(|_| Error::Validation("name, email and job_id are required".to_string()))?;
    let (Some(name), Some(email), Some(job_id)) = (request.name, request.email, request.job_id)
    else {
        return Err(Error::Validation(
            "name, email and job_id are required".to_string(),
        ));
    };
    let phone = request.phone.filter(|p| !p.is_empty());

    let (first_name, last_name) = split_name(&name);
    let payload = AtsCandidatePayload {
        first_name,
        last_name,
        emails: vec![ContactPoint::new(email.clone(), "work")],
        phones: phone
            .iter()
            .map(|p| ContactPoint::new(p.clone(), "mobile"))
            .collect(),
        photo_url: None,
        social_links: Vec::new(),
        cv_url: request.resume_url,
    };

    let created = client.create_candidate(&payload).await?;
    let candidate_id = created.created_id().ok_or_else(|| {
        Error::Internal("ATS did not return an id for the created candidate".to_string())
    })?;
    info!(candidate_id = %candidate_id, job_id = %job_id, "Candidate created in ATS");

    let application = client.create_application(&candidate_id, &job_id).await?;

    let body = CandidateCreatedResponse {
        application: UnifiedApplicationLink::new(&application, &candidate_id, &job_id),
        candidate: UnifiedCandidate {
            id: candidate_id,
            name,
            email: Some(email),
            phone,
        },
    };
    Ok(InvocationResponse::json(201, &body))
}

/// `GET /candidates`
pub async fn get_candidates(event: &InvocationEvent) -> InvocationResponse {
    let result = match client_from_env() {
        Ok(client) => fetch_candidates(&client, event).await,
        Err(e) => Err(e),
    };
    respond(Failure::CandidatesFetch, result)
}

pub async fn get_candidates_with(
    client: &AtsClient,
    event: &InvocationEvent,
) -> InvocationResponse {
    respond(Failure::CandidatesFetch, fetch_candidates(client, event).await)
}

async fn fetch_candidates(
    client: &AtsClient,
    event: &InvocationEvent,
) -> Result<InvocationResponse> {
    let page = event.query_i64("page")?;
    let per_page = event.query_i64("per_page")?;

    let candidates: Vec<UnifiedCandidate> = client
        .get_candidates(page, per_page)
        .await?
        .into_iter()
        .map(UnifiedCandidate::from)
        .collect();

    Ok(InvocationResponse::json(200, &CandidatesResponse { candidates }))
}

/// `POST /applications`
pub async fn create_application(event: &InvocationEvent) -> InvocationResponse {
    let result = match client_from_env() {
        Ok(client) => submit_application(&client, event).await,
        Err(e) => Err(e),
    };
    respond(Failure::ApplicationCreate, result)
}

pub async fn create_application_with(
    client: &AtsClient,
    event: &InvocationEvent,
) -> InvocationResponse {
    respond(
        Failure::ApplicationCreate,
        submit_application(client, event).await,
    )
}

async fn submit_application(
    client: &AtsClient,
    event: &InvocationEvent,
) -> Result<InvocationResponse> {
    let request: CreateApplicationRequest = event.json_body()?;
    request
        .validate()
        .map_err(|_| Error::Validation("candidate_id and job_id are required".to_string()))?;
    let (Some(candidate_id), Some(job_id)) = (request.candidate_id, request.job_id) else {
        return Err(Error::Validation(
            "candidate_id and job_id are required".to_string(),
        ));
    };

    let created = client.create_application(&candidate_id, &job_id).await?;
    let body = ApplicationCreatedResponse {
        application: UnifiedApplicationLink::new(&created, &candidate_id, &job_id),
    };
    Ok(InvocationResponse::json(201, &body))
}

/// `GET /applications?job_id=`
pub async fn get_applications(event: &InvocationEvent) -> InvocationResponse {
    let result = match client_from_env() {
        Ok(client) => fetch_applications(&client, event).await,
        Err(e) => Err(e),
    };
    respond(Failure::ApplicationsFetch, result)
}

pub async fn get_applications_with(
    client: &AtsClient,
    event: &InvocationEvent,
) -> InvocationResponse {
    respond(
        Failure::ApplicationsFetch,
        fetch_applications(client, event).await,
    )
}

async fn fetch_applications(
    client: &AtsClient,
    event: &InvocationEvent,
) -> Result<InvocationResponse> {
    let job_id = event.query("job_id");
    let page = event.query_i64("page")?;
    let per_page = event.query_i64("per_page")?;

    let applications: Vec<UnifiedApplication> = client
        .get_applications(job_id, page, per_page)
        .await?
        .into_iter()
        .map(UnifiedApplication::from)
        .collect();

    Ok(InvocationResponse::json(
        200,
        &ApplicationsResponse { applications },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdapterConfig;

    // Nothing listens on port 9; validation must fail before any request.
    fn unreachable_client() -> AtsClient {
        AtsClient::new(AdapterConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "k".to_string(),
            applications_path: "/applications".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn create_candidate_requires_name_email_job() {
        let client = unreachable_client();
        for body in [
            r#"{"email": "j@x.com", "job_id": "5"}"#,
            r#"{"name": "Jane Doe", "job_id": "5"}"#,
            r#"{"name": "Jane Doe", "email": "j@x.com"}"#,
            r#"{"name": "", "email": "j@x.com", "job_id": "5"}"#,
        ] {
            let event = InvocationEvent::default().with_body(body);
            let resp = create_candidate_with(&client, &event).await;
            assert_eq!(resp.status_code, 400, "body {}", body);
            assert_eq!(resp.body_json().unwrap()["error"], VALIDATION_ERROR);
        }
    }

    #[tokio::test]
    async fn create_application_requires_both_ids() {
        let client = unreachable_client();
        let event = InvocationEvent::default().with_body(r#"{"job_id": 5}"#);
        let resp = create_application_with(&client, &event).await;
        assert_eq!(resp.status_code, 400);
        assert_eq!(resp.body_json().unwrap()["error"], VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn malformed_body_is_a_server_error() {
        let client = unreachable_client();
        let event = InvocationEvent::default().with_body("{not json");
        let resp = create_application_with(&client, &event).await;
        assert_eq!(resp.status_code, 500);
        assert_eq!(resp.body_json().unwrap()["error"], "ApplicationCreateFailed");
    }

    #[tokio::test]
    async fn non_integer_page_is_a_server_error() {
        let client = unreachable_client();
        let event = InvocationEvent::default().with_query("page", "first");
        let resp = get_jobs_with(&client, &event).await;
        assert_eq!(resp.status_code, 500);
        let body = resp.body_json().unwrap();
        assert_eq!(body["error"], "JobsFetchFailed");
        assert!(body["message"].as_str().unwrap().contains("page"));
    }

    #[test]
    fn hello_echoes_path() {
        let event = InvocationEvent {
            raw_path: Some("/hello".to_string()),
            ..Default::default()
        };
        let resp = hello(&event);
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body_json().unwrap()["Path"], "/hello");
    }
}
