pub mod ats_dto;
pub mod store_dto;
pub mod unified_dto;
