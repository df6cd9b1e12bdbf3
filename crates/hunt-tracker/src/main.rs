use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hunt_tracker::{router, TrackerState};

#[tokio::main]
async fn main() {
    // Cargar .env si existe para TRACKER_ADDR
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .init();

    let addr = std::env::var("TRACKER_ADDR").unwrap_or_else(|_| "127.0.0.1:8844".to_string());
    let state = Arc::new(TrackerState::new());
    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[hunt-tracker] no se pudo abrir {addr}: {e}");
            std::process::exit(5);
        }
    };
    info!(%addr, "colector escuchando");
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("[hunt-tracker] error del servidor: {e}");
        std::process::exit(5);
    }
}
