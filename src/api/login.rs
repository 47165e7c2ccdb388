use axum::{Json, extract::State};

use crate::{
    config::SpotifyConfig,
    error::Result,
    spotify::auth::{authorize_url, generate_state},
    types::AuthorizeResponse,
};

/// `GET /api/spotify/login`
///
/// Hands the frontend the URL to send the user to. The `state` is returned
/// alongside so the frontend can compare it with the one on the redirect.
pub async fn login(State(config): State<SpotifyConfig>) -> Result<Json<AuthorizeResponse>> {
    let state = generate_state();
    let authorize_url = authorize_url(&config, &state)?;
    Ok(Json(AuthorizeResponse {
        authorize_url,
        state,
    }))
}
