use std::time::Duration;

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::AdapterConfig;
use crate::dto::ats_dto::{
    list_items, AtsApplication, AtsApplicationPayload, AtsCandidate, AtsCandidatePayload, AtsJob,
};
use crate::error::{Error, Result};

const READ_TIMEOUT: Duration = Duration::from_secs(15);
const WRITE_TIMEOUT: Duration = Duration::from_secs(20);
const APPLICATIONS_READ_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP client for a generically shaped ATS API.
///
/// Each call issues exactly one request. A non-2xx answer becomes
/// [`Error::Transport`] carrying the upstream status and body.
#[derive(Clone)]
pub struct AtsClient {
    client: Client,
    base_url: String,
    applications_path: String,
}

impl AtsClient {
    pub fn new(config: AdapterConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(&config.api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            applications_path: config.applications_path,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(AdapterConfig::from_env()?)
    }

    pub async fn get_jobs(&self, page: Option<i64>, per_page: Option<i64>) -> Result<Vec<AtsJob>> {
        let url = format!("{}/offers", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(&page_params(page, per_page))
            .timeout(READ_TIMEOUT);
        let body: JsonValue = self.send("jobs", request).await?;
        Ok(list_items(body)?)
    }

    pub async fn create_candidate(&self, payload: &AtsCandidatePayload) -> Result<AtsCandidate> {
        let url = format!("{}/candidates", self.base_url);
        let request = self.client.post(&url).json(payload).timeout(WRITE_TIMEOUT);
        self.send("create candidate", request).await
    }

    pub async fn get_candidates(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<Vec<AtsCandidate>> {
        let url = format!("{}/candidates", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(&page_params(page, per_page))
            .timeout(READ_TIMEOUT);
        let body: JsonValue = self.send("candidates", request).await?;
        Ok(list_items(body)?)
    }

    /// Attaches a candidate to a job (creates the pipeline entry).
    pub async fn create_application(
        &self,
        candidate_id: &str,
        job_id: &str,
    ) -> Result<AtsApplication> {
        let url = format!("{}{}", self.base_url, self.applications_path);
        let payload = AtsApplicationPayload {
            candidate_id,
            job_id,
        };
        let request = self.client.post(&url).json(&payload).timeout(WRITE_TIMEOUT);
        self.send("create application", request).await
    }

    pub async fn get_applications(
        &self,
        job_id: Option<&str>,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<Vec<AtsApplication>> {
        let url = format!("{}{}", self.base_url, self.applications_path);
        let mut params = Vec::new();
        if let Some(job_id) = job_id {
            params.push(("job_id", job_id.to_string()));
        }
        params.extend(page_params(page, per_page));

        let request = self
            .client
            .get(&url)
            .query(&params)
            .timeout(APPLICATIONS_READ_TIMEOUT);
        let body: JsonValue = self.send("applications", request).await?;
        Ok(list_items(body)?)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;

        let status = response.status();
        debug!("ATS {} responded with {}", operation, status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

fn default_headers(api_key: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|_| Error::Config("AtsApiKey is not a valid header value".to_string()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn page_params(page: Option<i64>, per_page: Option<i64>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(page) = page {
        params.push(("page", page.to_string()));
    }
    if let Some(per_page) = per_page {
        params.push(("per_page", per_page.to_string()));
    }
    params
}
