pub mod ats_client;
