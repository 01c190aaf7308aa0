use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Browser clients may call the mock ATS from any origin.
pub fn mock_ats_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any)
}
