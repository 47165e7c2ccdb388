use axum::{Json, extract::State};

use crate::{
    api::ApiQuery,
    config::SpotifyConfig,
    error::Result,
    spotify::SpotifyClient,
    types::{StatusQuery, StatusResponse},
};

/// `GET /api/spotify/status?access_token=...`
///
/// Without a token the answer is an unconnected status and nothing is sent
/// upstream. With a token, exactly one `/me` call decides the outcome.
pub async fn status(
    State(config): State<SpotifyConfig>,
    ApiQuery(params): ApiQuery<StatusQuery>,
) -> Result<Json<StatusResponse>> {
    let Some(token) = params.access_token.filter(|t| !t.is_empty()) else {
        return Ok(Json(StatusResponse {
            spotify_connected: false,
            message: "No access token provided".to_string(),
            next_steps: "Sign in through /api/spotify/login to obtain an access token".to_string(),
        }));
    };

    let client = SpotifyClient::new(config)?;
    let (connected, message) = client.check_status(&token).await;
    let next_steps = if connected {
        "Fetch your top tracks from /api/spotify/top-tracks"
    } else {
        "Sign in again through /api/spotify/login"
    };

    Ok(Json(StatusResponse {
        spotify_connected: connected,
        message,
        next_steps: next_steps.to_string(),
    }))
}
