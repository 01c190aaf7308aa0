use std::sync::Arc;

use ats_bridge::{
    database::{JsonFileStore, MemoryStore},
    middleware::auth::StaticToken,
    routes::mock_ats_router,
    AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

const TOKEN: &str = "Dummy_Key_1608";

fn seeded_jobs(count: i64) -> Vec<JsonValue> {
    (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Role {}", i),
                "location": "Remote",
                "status": "open"
            })
        })
        .collect()
}

fn setup_app(store: MemoryStore) -> Router {
    mock_ats_router(AppState::new(Arc::new(store)), StaticToken::new(TOKEN))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {}", TOKEN))
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {}", TOKEN))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn requests_without_valid_bearer_are_rejected() {
    let app = setup_app(MemoryStore::with_jobs(seeded_jobs(2)));

    for (method, uri) in [
        ("GET", "/offers"),
        ("POST", "/candidates"),
        ("GET", "/candidates"),
        ("POST", "/applications"),
        ("GET", "/applications?job_id=1"),
        ("GET", "/health"),
    ] {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(body, json!({"error": "Unauthorized"}), "{} {}", method, uri);
    }

    let req = Request::builder()
        .uri("/offers")
        .header("authorization", format!("Token {}", TOKEN))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Unauthorized"}));

    let req = Request::builder()
        .uri("/offers")
        .header("authorization", "Bearer wrong")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid token"}));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn preflight_skips_token_check() {
    let app = setup_app(MemoryStore::new());

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/candidates")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_ne!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn offers_are_paginated() {
    let app = setup_app(MemoryStore::with_jobs(seeded_jobs(25)));

    let (status, body) = send(&app, get("/offers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    let (_, body) = send(&app, get("/offers?page=3&per_page=10")).await;
    let page = body["data"].as_array().unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page[0]["id"], 21);

    let (_, body) = send(&app, get("/offers?page=4&per_page=10")).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, get("/offers?page=0")).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn candidates_get_sequential_ids() {
    let app = setup_app(MemoryStore::new());

    let (status, body) = send(
        &app,
        post(
            "/candidates",
            json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "emails": [{"value": "jane@x.com", "type": "work"}]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["phones"], json!([]));
    assert_eq!(body["emails"][0]["value"], "jane@x.com");

    let (_, body) = send(&app, post("/candidates", json!({"first_name": "John"}))).await;
    assert_eq!(body["id"], 2);

    let (status, body) = send(&app, get("/candidates")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1]["first_name"], "John");
}

#[tokio::test]
async fn candidate_fields_are_stored_as_sent() {
    let app = setup_app(MemoryStore::new());

    let sent = json!({
        "first_name": "Ana",
        "last_name": null,
        "emails": [{"value": "ana@x.com", "type": "work", "primary": true}],
        "phones": null,
        "cv_url": "https://cv/ana.pdf"
    });
    let (status, created) = send(&app, post("/candidates", sent)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["emails"][0]["primary"], json!(true));
    assert_eq!(created["phones"], JsonValue::Null);

    let (_, body) = send(&app, get("/candidates")).await;
    assert_eq!(
        body["data"][0],
        json!({
            "id": 1,
            "first_name": "Ana",
            "last_name": null,
            "emails": [{"value": "ana@x.com", "type": "work", "primary": true}],
            "phones": null,
            "cv_url": "https://cv/ana.pdf"
        })
    );
}

#[tokio::test]
async fn applications_are_filtered_and_enriched() {
    let app = setup_app(MemoryStore::new());

    send(
        &app,
        post(
            "/candidates",
            json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "emails": [{"value": "jane@x.com", "type": "work"}]
            }),
        ),
    )
    .await;

    let (status, created) = send(
        &app,
        post("/applications", json!({"candidate_id": "1", "job_id": "5"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "applied");

    // Dangling candidate reference on another job.
    send(
        &app,
        post("/applications", json!({"candidate_id": 99, "job_id": 6})),
    )
    .await;

    let (_, body) = send(&app, get("/applications?job_id=5")).await;
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed[0]["candidate"],
        json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "first_name": "Jane",
            "last_name": "Doe"
        })
    );

    let (_, body) = send(&app, get("/applications?job_id=6")).await;
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].get("candidate").is_none());

    let (_, body) = send(&app, get("/applications")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn json_store_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = JsonFileStore::open(dir.path()).unwrap();
        let app = mock_ats_router(AppState::new(Arc::new(store)), StaticToken::new(TOKEN));
        let (status, _) = send(&app, post("/candidates", json!({"first_name": "Jane"}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let raw = std::fs::read_to_string(dir.path().join("Candidates.json")).unwrap();
    assert!(raw.contains("\n  "));

    let store = JsonFileStore::open(dir.path()).unwrap();
    let app = mock_ats_router(AppState::new(Arc::new(store)), StaticToken::new(TOKEN));
    let (_, body) = send(&app, get("/candidates")).await;
    assert_eq!(body["data"][0]["first_name"], "Jane");

    let (_, created) = send(&app, post("/candidates", json!({"first_name": "John"}))).await;
    assert_eq!(created["id"], 2);
}
