pub mod applications;
pub mod candidates;
pub mod health;
pub mod offers;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::{auth::StaticToken, cors::mock_ats_cors};
use crate::AppState;

/// Full mock ATS surface: every route sits behind the static bearer token.
pub fn mock_ats_router(state: AppState, token: StaticToken) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/offers", get(offers::list_offers))
        .route(
            "/candidates",
            get(candidates::list_candidates).post(candidates::create_candidate),
        )
        .route(
            "/applications",
            get(applications::list_applications).post(applications::create_application),
        )
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            token,
            crate::middleware::auth::require_static_token,
        ))
        .layer(mock_ats_cors())
        .layer(TraceLayer::new_for_http())
}
