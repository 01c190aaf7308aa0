use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::store_dto::{DataResponse, ListQuery, NewCandidate},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<NewCandidate>,
) -> Result<impl IntoResponse> {
    let candidate = state.store.create_candidate(payload)?;
    tracing::info!(candidate_id = candidate.id, "Candidate created");
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let candidates = state.store.list_candidates(query.page_request())?;
    Ok(Json(DataResponse::from(candidates)))
}
