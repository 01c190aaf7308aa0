use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use super::records::Collections;
use super::{AtsStore, StoreError};
use crate::dto::store_dto::{NewApplication, NewCandidate};
use crate::models::{application::Application, candidate::Candidate};
use crate::utils::pagination::PageRequest;

pub const JOBS_FILE: &str = "Jobs.json";
pub const CANDIDATES_FILE: &str = "Candidates.json";
pub const APPLICATIONS_FILE: &str = "Applications.json";

/// Store backed by one pretty-printed JSON array per collection.
///
/// Every create rewrites the whole affected file before returning.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    inner: Mutex<Collections>,
}

impl JsonFileStore {
    /// Loads all collections from `dir`. A file that does not hold a JSON
    /// array is replaced on disk by an empty collection.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            file: dir.display().to_string(),
            source,
        })?;

        let collections = Collections {
            jobs: load_collection(&dir, JOBS_FILE)?,
            candidates: load_collection(&dir, CANDIDATES_FILE)?,
            applications: load_collection(&dir, APPLICATIONS_FILE)?,
        };
        info!(
            dir = %dir.display(),
            jobs = collections.jobs.len(),
            candidates = collections.candidates.len(),
            applications = collections.applications.len(),
            "Mock ATS data loaded"
        );

        Ok(Self {
            dir,
            inner: Mutex::new(collections),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("json store lock poisoned".to_string()))
    }
}

/// Reads one collection. Only a missing file, an unreadable file, invalid
/// JSON or a top-level value that is not an array resets it to `[]` on disk.
/// Any JSON array is kept as loaded, whatever its records look like.
fn load_collection(dir: &Path, file: &str) -> Result<Vec<JsonValue>, StoreError> {
    let path = dir.join(file);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<JsonValue>(&raw) {
                Ok(JsonValue::Array(items)) => return Ok(items),
                Ok(_) => warn!("Resetting {}: top-level value is not an array", file),
                Err(e) => warn!("Resetting {} after parse failure: {}", file, e),
            },
            Err(e) => warn!("Resetting {} after read failure: {}", file, e),
        }
    } else {
        info!("{} not found, starting empty", file);
    }

    let empty: Vec<JsonValue> = Vec::new();
    save_collection(dir, file, &empty)?;
    Ok(empty)
}

fn save_collection<T: Serialize>(dir: &Path, file: &str, items: &[T]) -> Result<(), StoreError> {
    let encoded = serde_json::to_string_pretty(items).map_err(|source| StoreError::Encode {
        file: file.to_string(),
        source,
    })?;
    fs::write(dir.join(file), encoded).map_err(|source| StoreError::Write {
        file: file.to_string(),
        source,
    })?;
    debug!("Wrote {} records to {}", items.len(), file);
    Ok(())
}

impl AtsStore for JsonFileStore {
    fn list_offers(&self, page: PageRequest) -> Result<Vec<JsonValue>, StoreError> {
        Ok(self.lock()?.offers_page(page))
    }

    // A failed write leaves the new record in memory; there is no rollback.
    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        let mut collections = self.lock()?;
        let created = collections.insert_candidate(candidate)?;
        save_collection(&self.dir, CANDIDATES_FILE, &collections.candidates)?;
        Ok(created)
    }

    fn list_candidates(&self, page: PageRequest) -> Result<Vec<JsonValue>, StoreError> {
        Ok(self.lock()?.candidates_page(page))
    }

    fn create_application(&self, application: NewApplication) -> Result<Application, StoreError> {
        let mut collections = self.lock()?;
        let created = collections.insert_application(application)?;
        save_collection(&self.dir, APPLICATIONS_FILE, &collections.applications)?;
        Ok(created)
    }

    fn list_applications(
        &self,
        job_id: Option<String>,
        page: PageRequest,
    ) -> Result<Vec<JsonValue>, StoreError> {
        Ok(self.lock()?.applications_page(job_id.as_deref(), page))
    }
}
