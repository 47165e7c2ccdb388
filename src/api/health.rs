//! Service-level endpoints that never talk to Spotify.

use axum::response::Json;
use serde_json::{Value, json};

/// `GET /`
///
/// Welcome message, mostly useful to see that the process is up.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Isoca Spot API",
        "status": "running"
    }))
}

/// `GET /health`
///
/// Liveness check reporting the crate name and version. Always healthy while
/// the server answers; upstream reachability is covered by `/api/spotify/status`.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
