//! End-to-end HTTP tests driven through the router in-process.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use notes_gateway::app_state::AppState;
use notes_gateway::config::GatewayConfig;
use notes_gateway::router::build_router;

fn app() -> (AppState, Router) {
    let state = AppState::new(&GatewayConfig::default()).unwrap();
    let router = build_router(state.clone());
    (state, router)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let req = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string())),
        None => req.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn crud_round_trip() {
    let (_, app) = app();

    let (status, body) = send(&app, Method::POST, "/", Some(json!({ "text": "hi" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({ "id": 1, "text": "hi" }));

    let (status, body) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({ "id": 1, "text": "hi" }));

    let (status, body) = send(&app, Method::PUT, "/1", Some(json!({ "text": "bye" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({ "id": 1, "text": "bye" }));

    let (status, body) = send(&app, Method::DELETE, "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&body)["error"], "NOT_FOUND");
}

#[tokio::test]
async fn list_returns_notes_in_id_order() {
    let (_, app) = app();
    for text in ["a", "b", "c"] {
        send(&app, Method::POST, "/", Some(json!({ "text": text }))).await;
    }

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_of(&body),
        json!([
            { "id": 1, "text": "a" },
            { "id": 2, "text": "b" },
            { "id": 3, "text": "c" }
        ])
    );
}

#[tokio::test]
async fn empty_list() {
    let (_, app) = app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!([]));
}

#[tokio::test]
async fn update_and_delete_missing_are_not_found() {
    let (state, app) = app();

    let (status, _) = send(&app, Method::PUT, "/7", Some(json!({ "text": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let errors = &state.metrics().service_errors;
    assert_eq!(errors.get(&[("op", "update"), ("code", "NOT_FOUND")]), 1);
    assert_eq!(errors.get(&[("op", "delete"), ("code", "NOT_FOUND")]), 1);
}

#[tokio::test]
async fn validation_error_is_bad_request() {
    let (state, app) = app();

    let (status, body) = send(&app, Method::POST, "/", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body)["error"], "BAD_REQUEST");

    // rejected creates still count as attempts
    assert_eq!(state.metrics().create_note.get(), 1);
}

#[tokio::test]
async fn invalid_update_is_bad_request_and_keeps_note() {
    let (state, app) = app();
    send(&app, Method::POST, "/", Some(json!({ "text": "hi" }))).await;

    let (status, body) = send(&app, Method::PUT, "/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body)["error"], "BAD_REQUEST");

    let (status, body) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({ "id": 1, "text": "hi" }));

    let errors = &state.metrics().service_errors;
    assert_eq!(errors.get(&[("op", "update"), ("code", "BAD_REQUEST")]), 1);
}

#[tokio::test]
async fn invalid_update_of_missing_note_is_not_found() {
    let (_, app) = app();
    let (status, body) = send(&app, Method::PUT, "/77", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&body)["error"], "NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_id_is_rejected_by_extractor() {
    let (_, app) = app();
    let (status, _) = send(&app, Method::GET, "/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn counters_only_move_on_list_and_create() {
    let (state, app) = app();

    send(&app, Method::POST, "/", Some(json!({ "text": "hi" }))).await;
    send(&app, Method::GET, "/", None).await;
    send(&app, Method::GET, "/", None).await;
    send(&app, Method::GET, "/1", None).await;
    send(&app, Method::PUT, "/1", Some(json!({ "text": "bye" }))).await;
    send(&app, Method::DELETE, "/1", None).await;

    let m = state.metrics();
    assert_eq!(m.create_note.get(), 1);
    assert_eq!(m.get_all_notes.get(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn counters_do_not_lose_concurrent_increments() {
    let (state, app) = app();
    let mut handles = Vec::new();
    for i in 0..100 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let (s1, _) = send(&app, Method::POST, "/", Some(json!({ "n": i }))).await;
            let (s2, _) = send(&app, Method::GET, "/", None).await;
            assert_eq!(s1, StatusCode::OK);
            assert_eq!(s2, StatusCode::OK);
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let m = state.metrics();
    assert_eq!(m.create_note.get(), 100);
    assert_eq!(m.get_all_notes.get(), 100);
}

#[tokio::test]
async fn metrics_and_health_endpoints() {
    let (_, app) = app();
    send(&app, Method::POST, "/", Some(json!({ "text": "hi" }))).await;
    send(&app, Method::GET, "/", None).await;
    send(&app, Method::GET, "/99", None).await;

    let (status, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("create_note_count 1\n"));
    assert!(text.contains("get_all_notes_count 1\n"));
    assert!(text.contains(r#"note_service_errors_total{code="NOT_FOUND",op="get"} 1"#));
}
