//! Tests del contrato HTTP del colector: ingesta, monotonía y reset.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hunt_tracker::{router, TrackerState};

fn event_request(body: Value) -> Request<Body> {
    Request::builder().method("POST")
                      .uri("/api/event")
                      .header("content-type", "application/json")
                      .body(Body::from(body.to_string()))
                      .unwrap()
}

async fn json_of(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn submit_event_acks_and_applies() {
    let state = Arc::new(TrackerState::new());
    let app = router(state.clone());

    let body = json!({ "type": "step", "team_id": "rojo", "team_name": "Equipo Rojo", "step": 2 });
    let response = app.oneshot(event_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reply = json_of(response).await;
    assert_eq!(reply["ok"], true);
    assert_eq!(reply["applied"], true);

    let snap = state.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].step, 2);
    assert_eq!(snap[0].team_name, "Equipo Rojo");
}

#[tokio::test]
async fn stale_event_is_acked_but_discarded() {
    let state = Arc::new(TrackerState::new());

    let first = json!({ "type": "step", "team_id": "rojo", "step": 3 });
    let response = router(state.clone()).oneshot(event_request(first)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stale = json!({ "type": "step", "team_id": "rojo", "step": 1 });
    let response = router(state.clone()).oneshot(event_request(stale)).await.unwrap();
    // Siempre se confirma: el cliente no reintenta ni distingue.
    assert_eq!(response.status(), StatusCode::OK);
    let reply = json_of(response).await;
    assert_eq!(reply["applied"], false);
    assert_eq!(state.snapshot()[0].step, 3);
}

#[tokio::test]
async fn reset_clears_history() {
    let state = Arc::new(TrackerState::new());
    let body = json!({ "type": "step", "team_id": "rojo", "step": 2 });
    router(state.clone()).oneshot(event_request(body)).await.unwrap();

    let reset = Request::builder().method("POST").uri("/api/reset").body(Body::empty()).unwrap();
    let response = router(state.clone()).oneshot(reset).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.snapshot().is_empty());
}

#[tokio::test]
async fn subscriber_receives_updates() {
    let state = Arc::new(TrackerState::new());
    let mut rx = state.subscribe();

    let body = json!({ "type": "step", "team_id": "azul", "step": 1 });
    router(state.clone()).oneshot(event_request(body)).await.unwrap();

    let msg = rx.recv().await.unwrap();
    let parsed: Value = serde_json::from_str(&msg).unwrap();
    assert_eq!(parsed["event"]["team_id"], "azul");
    assert_eq!(parsed["teams"][0]["step"], 1);
}
