//! End-to-end tests for the NIC validator HTTP API.
//!
//! Uses tower::ServiceExt::oneshot to drive the axum router directly.
//! No listener or network needed.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use nicdfa_api::{app, AppState};

// ──────────── Test Infrastructure ────────────

fn test_app() -> Router {
    app(AppState::new())
}

async fn send(app: Router, method: Method, path: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    send(test_app(), Method::POST, path, Some(body.to_string())).await
}

async fn get(path: &str) -> (StatusCode, Value) {
    send(test_app(), Method::GET, path, None).await
}

// ──────────── Health ────────────

#[tokio::test]
async fn test_health_is_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// ──────────── Validation ────────────

#[tokio::test]
async fn test_validate_legacy_nic() {
    let (status, body) = post_json("/validate-nic", json!({"nic": "981234567V"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "ACCEPT");
    assert_eq!(body["final_state"], "q10");
    assert_eq!(body["input"], "981234567V");
    assert_eq!(body["format"], "Old NIC (9 digits + V/X)");
}

#[tokio::test]
async fn test_validate_modern_nic() {
    let (status, body) = post_json("/validate-nic", json!({"nic": "199812345678"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "ACCEPT");
    assert_eq!(body["final_state"], "q13");
    assert_eq!(body["format"], "New NIC (12 digits)");
}

#[tokio::test]
async fn test_validate_rejects_without_format_label() {
    let (status, body) = post_json("/validate-nic", json!({"nic": "981234567Z"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "REJECT");
    assert!(body.get("format").is_none(), "format must be absent on REJECT");
}

#[tokio::test]
async fn test_validate_empty_string_is_reject_not_error() {
    let (status, body) = post_json("/validate-nic", json!({"nic": ""})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "REJECT");
    assert_eq!(body["final_state"], "q_reject");
}

#[tokio::test]
async fn test_validate_trailing_character_rejects() {
    let (status, body) = post_json("/validate-nic", json!({"nic": "981234567VX"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "REJECT");
    assert_eq!(body["final_state"], "q_reject");
}

// ──────────── Trace ────────────

#[tokio::test]
async fn test_trace_legacy_nic() {
    let (status, body) = post_json("/validate-nic-trace", json!({"nic": "981234567V"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "ACCEPT");
    assert_eq!(body["final_state"], "q10");

    let trace = body["trace"].as_array().unwrap();
    assert_eq!(trace.len(), 11);
    assert_eq!(trace[0], json!({"step": 0, "input": "", "state": "q0"}));
    assert_eq!(trace[1], json!({"step": 1, "input": "9", "state": "q1"}));
    assert_eq!(trace[10], json!({"step": 10, "input": "V", "state": "q10"}));
}

#[tokio::test]
async fn test_trace_empty_input_single_entry() {
    let (status, body) = post_json("/validate-nic-trace", json!({"nic": ""})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "REJECT");
    let trace = body["trace"].as_array().unwrap();
    assert_eq!(trace.len(), 1);
    assert_eq!(trace[0], json!({"step": 0, "input": "", "state": "q_reject"}));
}

#[tokio::test]
async fn test_trace_reject_is_absorbing() {
    let (_, body) = post_json("/validate-nic-trace", json!({"nic": "98A234"})).await;
    let trace = body["trace"].as_array().unwrap();
    // 'A' at step 3 forces q_reject; every later entry stays there.
    assert_eq!(trace[3]["state"], "q_reject");
    for entry in &trace[3..] {
        assert_eq!(entry["state"], "q_reject");
    }
}

// ──────────── Request-shape errors ────────────

#[tokio::test]
async fn test_missing_nic_field_is_bad_request() {
    let (status, body) = post_json("/validate-nic", json!({"number": "981234567V"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("'nic'"));
}

#[tokio::test]
async fn test_non_string_nic_is_bad_request() {
    for candidate in [json!(981234567), json!(null), json!(["981234567V"])] {
        let (status, body) = post_json("/validate-nic", json!({ "nic": candidate })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 400);
    }
}

#[tokio::test]
async fn test_non_object_body_is_bad_request() {
    let (status, _) = post_json("/validate-nic", json!(["981234567V"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, body) = send(
        test_app(),
        Method::POST,
        "/validate-nic",
        Some("{not json".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn test_trace_route_shares_error_taxonomy() {
    let (status, _) = post_json("/validate-nic-trace", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ──────────── Introspection ────────────

#[tokio::test]
async fn test_dfa_info_shape() {
    let (status, body) = get("/dfa-info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["automaton_type"], "Deterministic Finite Automaton (DFA)");
    assert_eq!(body["start_state"], "q0");
    assert_eq!(body["accepting_states"], json!(["q10", "q13"]));
    assert_eq!(body["alphabet"], json!(["0-9", "V", "X"]));
    assert_eq!(body["states"]["q_reject"], "Reject state");
    assert_eq!(body["valid_formats"].as_array().unwrap().len(), 2);
}

// ──────────── Fallback ────────────

#[tokio::test]
async fn test_unknown_route_is_structured_404() {
    let (status, body) = get("/no-such-endpoint").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 404);
}
