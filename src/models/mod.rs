pub mod application;
pub mod candidate;
pub mod record_id;
