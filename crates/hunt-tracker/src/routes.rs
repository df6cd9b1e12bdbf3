//! Rutas HTTP del colector.
//!
//! `POST /api/event` confirma siempre (el cliente es fire-and-forget y no
//! reintenta); `GET /api/stream` es un feed SSE con snapshot inicial y
//! actualizaciones; `POST /api/reset` vacía el historial.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::Json;
use futures_util::stream::{self, StreamExt};
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use crate::state::{EventPayload, TrackerState};

pub async fn submit_event(State(state): State<Arc<TrackerState>>,
                          Json(payload): Json<EventPayload>)
                          -> impl IntoResponse {
    let applied = state.ingest(payload);
    if !applied {
        debug!("evento descartado por monotonía de paso");
    }
    Json(json!({ "ok": true, "applied": applied }))
}

pub async fn stream_events(State(state): State<Arc<TrackerState>>) -> impl IntoResponse {
    let rx = state.subscribe();
    let initial = json!({ "event": null, "teams": state.snapshot() }).to_string();
    let first = stream::once(async move { Ok::<Event, Infallible>(Event::default().event("status").data(initial)) });

    let updates = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(msg) => {
                    return Some((Ok::<Event, Infallible>(Event::default().event("status").data(msg)), rx));
                }
                // Receptor rezagado: se pierden mensajes intermedios, el
                // siguiente llega con el estado agregado completo.
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(first.chain(updates)).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)).text("ping"))
}

pub async fn reset(State(state): State<Arc<TrackerState>>) -> impl IntoResponse {
    state.reset();
    Json(json!({ "ok": true }))
}
