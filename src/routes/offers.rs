use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::store_dto::{DataResponse, ListQuery},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.store.list_offers(query.page_request())?;
    Ok(Json(DataResponse::from(jobs)))
}
