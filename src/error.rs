//! Error kinds surfaced by the service.
//!
//! The core (genre resolution and track aggregation) never recovers from an
//! upstream failure locally. It returns one of these kinds and the gateway
//! maps it onto an HTTP status with a `{"detail": ...}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::types::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required query parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("Invalid value for query parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Malformed query string: {0}")]
    MalformedQuery(String),

    #[error("Token exchange failed: {0}")]
    TokenExchangeFailure(String),

    #[error("Upstream lookup failed{}: {detail}", with_status(status))]
    UpstreamLookup { status: Option<u16>, detail: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unexpected failure: {0}")]
    UnknownFailure(String),
}

fn with_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {code}"),
        None => String::new(),
    }
}

impl Error {
    /// Builds an [`Error::UpstreamLookup`] from a failed reqwest call.
    ///
    /// Timeouts, connection failures, non-success statuses and body decoding
    /// errors all land here.
    pub fn upstream(err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            "request to Spotify timed out".to_string()
        } else {
            err.to_string()
        };
        Error::UpstreamLookup {
            status: err.status().map(|s| s.as_u16()),
            detail,
        }
    }

    /// The HTTP status the gateway answers with for this error kind.
    ///
    /// Caller-supplied input problems (including a token Spotify rejects)
    /// are 400, provider-side exchange and server problems are 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingParameter(_)
            | Error::InvalidParameter { .. }
            | Error::MalformedQuery(_)
            | Error::UpstreamLookup { .. } => StatusCode::BAD_REQUEST,
            Error::TokenExchangeFailure(_)
            | Error::Configuration(_)
            | Error::UnknownFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
