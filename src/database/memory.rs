use std::sync::{Mutex, MutexGuard};

use serde_json::Value as JsonValue;

use super::records::Collections;
use super::{AtsStore, StoreError};
use crate::dto::store_dto::{NewApplication, NewCandidate};
use crate::models::{application::Application, candidate::Candidate};
use crate::utils::pagination::PageRequest;

/// Store that keeps everything in process memory. Used by tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(jobs: Vec<JsonValue>) -> Self {
        Self {
            inner: Mutex::new(Collections {
                jobs,
                ..Default::default()
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl AtsStore for MemoryStore {
    fn list_offers(&self, page: PageRequest) -> Result<Vec<JsonValue>, StoreError> {
        Ok(self.lock()?.offers_page(page))
    }

    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        Ok(self.lock()?.insert_candidate(candidate)?)
    }

    fn list_candidates(&self, page: PageRequest) -> Result<Vec<JsonValue>, StoreError> {
        Ok(self.lock()?.candidates_page(page))
    }

    fn create_application(&self, application: NewApplication) -> Result<Application, StoreError> {
        Ok(self.lock()?.insert_application(application)?)
    }

    fn list_applications(
        &self,
        job_id: Option<String>,
        page: PageRequest,
    ) -> Result<Vec<JsonValue>, StoreError> {
        Ok(self.lock()?.applications_page(job_id.as_deref(), page))
    }
}
