use axum::{Json, extract::State};

use crate::{
    api::ApiQuery,
    config::SpotifyConfig,
    error::{Error, Result},
    spotify::SpotifyClient,
    success,
    types::{CallbackQuery, CallbackResponse},
    warning,
};

/// `GET /api/spotify/callback?code=...`
///
/// Exchanges the authorization code Spotify redirected with for an access
/// token. A missing code is rejected before anything is sent upstream.
pub async fn callback(
    State(config): State<SpotifyConfig>,
    ApiQuery(params): ApiQuery<CallbackQuery>,
) -> Result<Json<CallbackResponse>> {
    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Err(Error::MissingParameter("code"));
    };

    let client = SpotifyClient::new(config)?;
    match client.exchange_code(&code).await {
        Ok(token) => {
            success!("Authorization code exchanged for an access token");
            Ok(Json(CallbackResponse {
                access_token: token.access_token,
                message: "Spotify authorization successful".to_string(),
            }))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Err(e)
        }
    }
}
