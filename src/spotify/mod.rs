//! # Spotify Integration Module
//!
//! This module is the integration layer between the service and Spotify's
//! Web API and accounts service. It owns all outbound HTTP traffic.
//!
//! ## Architecture
//!
//! ```text
//! Gateway (api handlers)
//!          ↓
//! Enrichment (top tracks + genres)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization-code exchange, authorize URL)
//!     ├── Artists (bulk genre lookup)
//!     ├── Tracks (top tracks page)
//!     └── Profile (connectivity check)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Request Model
//!
//! A [`SpotifyClient`] is built per inbound request from the shared,
//! read-only [`SpotifyConfig`]. Access tokens are passed into every call and
//! never stored on the client, so two requests can never observe each
//! other's credentials.
//!
//! Every outbound call carries the configured timeout. A timeout, transport
//! failure, non-success status or undecodable body becomes
//! [`Error::UpstreamLookup`] for Web API calls and
//! [`Error::TokenExchangeFailure`] for the token endpoint. Nothing is
//! retried here.
//!
//! ## API Coverage
//!
//! - `GET /me/top/tracks` - One page of the user's top tracks
//! - `GET /artists?ids=` - Several artists in one request, for their genres
//! - `GET /me` - Current user profile, used as a connectivity check
//! - `POST /api/token` - Authorization-code exchange

pub mod artists;
pub mod auth;
pub mod profile;
pub mod tracks;

pub use artists::GenreSource;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::SpotifyConfig,
    error::{Error, Result},
    types::ApiErrorResponse,
};

/// Request-scoped Spotify client.
pub struct SpotifyClient {
    http: Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    /// Builds a client whose outbound calls honour `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFailure`] if the HTTP client cannot be built
    /// (for instance when the TLS backend fails to initialise).
    pub fn new(config: SpotifyConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::UnknownFailure(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SpotifyConfig {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.config.api_url)
    }

    /// Performs an authenticated Web API `GET` and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> Result<T> {
        let response = self
            .http
            .get(self.api_url(path))
            .query(query)
            .bearer_auth(token)
            .send()
            .await
            .map_err(Error::upstream)?;

        let response = ensure_success(response).await?;
        response.json::<T>().await.map_err(Error::upstream)
    }
}

/// Turns a non-success Web API response into [`Error::UpstreamLookup`],
/// keeping Spotify's own error message when the body carries one.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(parsed) => parsed.error.message.unwrap_or_else(|| status.to_string()),
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body,
    };

    Err(Error::UpstreamLookup {
        status: Some(status.as_u16()),
        detail,
    })
}
