use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::store_dto::{ApplicationListQuery, DataResponse, NewApplication},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<NewApplication>,
) -> Result<impl IntoResponse> {
    let application = state.store.create_application(payload)?;
    tracing::info!(application_id = application.id, "Application created");
    Ok((StatusCode::CREATED, Json(application)))
}

#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse> {
    let applications = state
        .store
        .list_applications(query.job_filter(), query.page_request())?;
    Ok(Json(DataResponse::from(applications)))
}
