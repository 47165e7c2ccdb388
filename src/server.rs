use std::{net::SocketAddr, str::FromStr};

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::{Res, api, config::SpotifyConfig, info};

/// Builds the application router with permissive CORS.
///
/// `config` becomes the router state and is cloned into every handler.
pub fn router(config: SpotifyConfig) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/api/spotify/login", get(api::login))
        .route("/api/spotify/callback", get(api::callback))
        .route("/api/spotify/status", get(api::status))
        .route("/api/spotify/top-tracks", get(api::top_tracks))
        .layer(CorsLayer::permissive())
        .with_state(config)
}

/// Binds `addr` and serves [`router`] until the process is stopped.
pub async fn start_api_server(addr: &str, config: SpotifyConfig) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {addr:?}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(config)).await?;
    Ok(())
}
