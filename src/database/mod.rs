pub mod json_file;
pub mod memory;
pub mod records;

use serde_json::Value as JsonValue;

use crate::dto::store_dto::{NewApplication, NewCandidate};
use crate::models::{application::Application, candidate::Candidate};
use crate::utils::pagination::PageRequest;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {file}: {source}")]
    Encode {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode record: {0}")]
    Record(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// List/create capability backing the mock ATS routes. Listings return
/// stored records verbatim; creates return the typed record just added.
#[cfg_attr(test, mockall::automock)]
pub trait AtsStore: Send + Sync {
    fn list_offers(&self, page: PageRequest) -> Result<Vec<JsonValue>, StoreError>;

    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError>;

    fn list_candidates(&self, page: PageRequest) -> Result<Vec<JsonValue>, StoreError>;

    fn create_application(&self, application: NewApplication) -> Result<Application, StoreError>;

    /// Applications filtered by `job_id` (string comparison), enriched with
    /// candidate details, then paginated.
    fn list_applications(
        &self,
        job_id: Option<String>,
        page: PageRequest,
    ) -> Result<Vec<JsonValue>, StoreError>;
}
