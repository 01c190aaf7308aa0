use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use subtle::ConstantTimeEq;

/// The single bearer token the mock ATS accepts.
#[derive(Clone)]
pub struct StaticToken(Arc<str>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Arc::from(token.into()))
    }

    fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}

/// Rejects every request without `Authorization: Bearer <token>`, except
/// CORS preflight.
pub async fn require_static_token(
    State(token): State<StaticToken>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return unauthorized("Unauthorized");
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return unauthorized("Unauthorized");
    };
    let Some(presented) = auth_str.strip_prefix("Bearer ") else {
        return unauthorized("Unauthorized");
    };

    // Only the first whitespace-separated segment counts as the token.
    let presented = presented.split(' ').next().unwrap_or_default();
    if !token.matches(presented) {
        tracing::debug!("Rejected request with invalid bearer token");
        return unauthorized("Invalid token");
    }

    next.run(req).await
}
