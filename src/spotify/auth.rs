use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;

use crate::{
    config::SpotifyConfig,
    error::{Error, Result},
    spotify::SpotifyClient,
    types::{TokenErrorResponse, TokenResponse},
};

/// Generates the random `state` value echoed back by the authorize redirect.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Builds the Spotify authorization URL the user is sent to.
///
/// Parameters are percent-encoded, so redirect URIs and space-separated
/// scopes can be used verbatim.
///
/// # Errors
///
/// Returns [`Error::Configuration`] when `SPOTIFY_API_AUTH_URL` is not a
/// valid URL.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config, &generate_state())?;
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn authorize_url(config: &SpotifyConfig, state: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config.scope.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Configuration(format!("invalid authorize URL {}: {}", config.auth_url, e)))?;

    Ok(url.into())
}

impl SpotifyClient {
    /// Exchanges an authorization code for an access token.
    ///
    /// Posts the code to the accounts token endpoint using the
    /// `authorization_code` grant, authenticating the application with its
    /// client id and secret over HTTP basic auth. The returned token is
    /// handed to the caller and not kept anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenExchangeFailure`] when the endpoint cannot be
    /// reached, rejects the code, or answers without an `access_token`. The
    /// provider's `error` and `error_description` are kept in the message.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        let config = self.config();
        let res = self
            .http
            .post(&config.token_url)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::TokenExchangeFailure(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| Error::TokenExchangeFailure(e.to_string()))?;

        if !status.is_success() {
            let detail = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(description) => format!("{}: {}", err.error, description),
                    None => err.error,
                },
                Err(_) => status.to_string(),
            };
            return Err(Error::TokenExchangeFailure(detail));
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|_| {
            Error::TokenExchangeFailure("no access token in token endpoint response".to_string())
        })?;
        if token.access_token.is_empty() {
            return Err(Error::TokenExchangeFailure(
                "token endpoint returned an empty access token".to_string(),
            ));
        }

        Ok(token)
    }
}
