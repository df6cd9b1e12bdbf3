//! hunt-tracker: colector opcional de eventos de progreso en vivo.
//!
//! Proceso independiente del generador: acepta notificaciones concurrentes
//! de los navegadores de muchos equipos, serializa las actualizaciones por
//! equipo y reemite snapshots agregados por SSE. Un suscriptor lento o
//! desconectado nunca bloquea la ingesta.
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use state::{EventPayload, StoredEvent, TeamStatus, TrackerState};

/// Construye el router del servicio. Las páginas generadas se sirven desde
/// otro origen (o desde disco), así que el CORS es permisivo.
pub fn router(state: Arc<TrackerState>) -> Router {
    Router::new().route("/api/event", post(routes::submit_event))
                 .route("/api/stream", get(routes::stream_events))
                 .route("/api/reset", post(routes::reset))
                 .layer(CorsLayer::permissive())
                 .with_state(state)
}
