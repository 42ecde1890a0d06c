//! # Web API Tests
//!
//! Router-level tests through `tower::ServiceExt::oneshot`: wire contract,
//! per-field validation errors, and the soft-failure response shape.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{test_state, RecordingSender, RecordingStore};
use seminar_registration::web::create_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn valid_payload() -> Value {
    json!({
        "company": "Acme",
        "name": "Taro",
        "position": "Manager",
        "email": "taro@acme.com",
        "phone": "090-0000-0000",
        "selected_seminars": ["vol1"]
    })
}

fn post_registration(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/registrations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = create_router(test_state(RecordingStore::new(), RecordingSender::new()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn valid_submission_returns_completed_result() {
    let store = RecordingStore::new();
    let sender = RecordingSender::new();
    let app = create_router(test_state(store.clone(), sender.clone()));

    let response = app.oneshot(post_registration(&valid_payload())).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration completed");

    assert_eq!(store.record_count(), 1);
    let email = sender.last_message().expect("one email sent");
    assert!(email.text.contains("VOL.1"));
}

#[tokio::test]
async fn blank_company_returns_field_error_without_side_effects() {
    let store = RecordingStore::new();
    let sender = RecordingSender::new();
    let app = create_router(test_state(store.clone(), sender.clone()));

    let mut payload = valid_payload();
    payload["company"] = json!("");

    let response = app.oneshot(post_registration(&payload)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "VALIDATION_FAILED");
    assert_eq!(body["field_errors"][0]["field"], "company");

    assert_eq!(store.record_count(), 0);
    assert_eq!(sender.sent_count(), 0);
}

#[tokio::test]
async fn malformed_email_returns_email_field_error() {
    let app = create_router(test_state(RecordingStore::new(), RecordingSender::new()));

    let mut payload = valid_payload();
    payload["email"] = json!("not-an-address");

    let response = app.oneshot(post_registration(&payload)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    let fields: Vec<_> = body["field_errors"]
        .as_array()
        .expect("field_errors array")
        .iter()
        .map(|e| e["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["email"]);
}

#[tokio::test]
async fn empty_selection_returns_selection_field_error() {
    let app = create_router(test_state(RecordingStore::new(), RecordingSender::new()));

    let mut payload = valid_payload();
    payload["selected_seminars"] = json!([]);

    let response = app.oneshot(post_registration(&payload)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["field_errors"][0]["field"], "selected_seminars");
}

#[tokio::test]
async fn store_failure_yields_well_formed_soft_failure() {
    let store = RecordingStore::failing();
    let sender = RecordingSender::new();
    let app = create_router(test_state(store, sender.clone()));

    let response = app.oneshot(post_registration(&valid_payload())).await.expect("response");

    // Still HTTP 200 with a negative result, never a transport-level error.
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Registration failed");
    assert_eq!(sender.sent_count(), 0);
}

#[tokio::test]
async fn delivery_failure_yields_soft_failure_but_persists() {
    let store = RecordingStore::new();
    let sender = RecordingSender::failing();
    let app = create_router(test_state(store.clone(), sender));

    let response = app.oneshot(post_registration(&valid_payload())).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(store.record_count(), 1);
}

#[tokio::test]
async fn duplicate_submissions_both_succeed() {
    let store = RecordingStore::new();
    let sender = RecordingSender::new();
    let state = test_state(store.clone(), sender.clone());

    for _ in 0..2 {
        let app = create_router(state.clone());
        let response =
            app.oneshot(post_registration(&valid_payload())).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
    }

    assert_eq!(store.record_count(), 2);
    assert_eq!(sender.sent_count(), 2);
}
