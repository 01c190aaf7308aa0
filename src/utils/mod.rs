pub mod pagination;
pub mod serde_helpers;
