pub mod adapter;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::database::AtsStore;

/// Shared state for the mock ATS server.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AtsStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AtsStore>) -> Self {
        Self { store }
    }
}
