#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use isoca_spot::{config::SpotifyConfig, server};
use serde_json::{Value, json};

/// Canned answers and call counters of an in-process stand-in for Spotify.
pub struct MockSpotify {
    pub top_tracks_status: StatusCode,
    pub top_tracks_body: Value,
    pub artists_status: StatusCode,
    pub artists_body: Value,
    pub token_status: StatusCode,
    pub token_body: Value,
    pub valid_token: String,
    pub artists_delay: Option<Duration>,

    pub top_tracks_calls: AtomicUsize,
    pub artists_calls: AtomicUsize,
    pub me_calls: AtomicUsize,
    pub token_calls: AtomicUsize,
    pub requested_ids: Mutex<Vec<String>>,
}

impl Default for MockSpotify {
    fn default() -> Self {
        Self {
            top_tracks_status: StatusCode::OK,
            top_tracks_body: json!({ "items": [] }),
            artists_status: StatusCode::OK,
            artists_body: json!({ "artists": [] }),
            token_status: StatusCode::OK,
            token_body: json!({
                "access_token": "fresh-token",
                "token_type": "Bearer",
                "scope": "user-top-read",
                "expires_in": 3600,
                "refresh_token": "refresh"
            }),
            valid_token: "good".to_string(),
            artists_delay: None,
            top_tracks_calls: AtomicUsize::new(0),
            artists_calls: AtomicUsize::new(0),
            me_calls: AtomicUsize::new(0),
            token_calls: AtomicUsize::new(0),
            requested_ids: Mutex::new(Vec::new()),
        }
    }
}

impl MockSpotify {
    pub fn artists_calls(&self) -> usize {
        self.artists_calls.load(Ordering::SeqCst)
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn me_calls(&self) -> usize {
        self.me_calls.load(Ordering::SeqCst)
    }

    pub fn top_tracks_calls(&self) -> usize {
        self.top_tracks_calls.load(Ordering::SeqCst)
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {}", self.valid_token))
    }
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
    )
}

async fn top_tracks(
    State(mock): State<Arc<MockSpotify>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    mock.top_tracks_calls.fetch_add(1, Ordering::SeqCst);
    if !mock.authorized(&headers) {
        return unauthorized();
    }
    (mock.top_tracks_status, Json(mock.top_tracks_body.clone()))
}

async fn artists(
    State(mock): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    mock.artists_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(ids) = params.get("ids") {
        mock.requested_ids.lock().unwrap().push(ids.clone());
    }
    if let Some(delay) = mock.artists_delay {
        tokio::time::sleep(delay).await;
    }
    if !mock.authorized(&headers) {
        return unauthorized();
    }
    (mock.artists_status, Json(mock.artists_body.clone()))
}

async fn me(State(mock): State<Arc<MockSpotify>>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    mock.me_calls.fetch_add(1, Ordering::SeqCst);
    if !mock.authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(json!({ "id": "listener", "display_name": "Listener" })))
}

async fn token(State(mock): State<Arc<MockSpotify>>) -> (StatusCode, Json<Value>) {
    mock.token_calls.fetch_add(1, Ordering::SeqCst);
    (mock.token_status, Json(mock.token_body.clone()))
}

/// Serves `mock` on an ephemeral port and returns a config pointing at it.
pub async fn spawn_spotify(mock: MockSpotify) -> (SpotifyConfig, Arc<MockSpotify>) {
    let mock = Arc::new(mock);
    let app = Router::new()
        .route("/v1/me/top/tracks", get(top_tracks))
        .route("/v1/artists", get(artists))
        .route("/v1/me", get(me))
        .route("/api/token", post(token))
        .with_state(Arc::clone(&mock));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = SpotifyConfig {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_uri: "http://localhost:4200/callback".to_string(),
        scope: "user-top-read user-read-private".to_string(),
        api_url: format!("http://{addr}/v1"),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: format!("http://{addr}/api/token"),
        timeout: Duration::from_secs(5),
    };

    (config, mock)
}

/// Serves the application router on an ephemeral port and returns its base URL.
pub async fn spawn_app(config: SpotifyConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::router(config)).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn track_json(name: &str, artists: &[(&str, &str)]) -> Value {
    json!({
        "name": name,
        "popularity": 70,
        "artists": artists
            .iter()
            .map(|(id, name)| json!({ "id": id, "name": name }))
            .collect::<Vec<_>>(),
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{name}") },
        "album": {
            "images": [
                { "url": format!("https://i.scdn.co/{name}/640"), "width": 640, "height": 640 },
                { "url": format!("https://i.scdn.co/{name}/64"), "width": 64, "height": 64 }
            ]
        }
    })
}
