//! # API Module
//!
//! HTTP endpoints of the Isoca Spot service.
//!
//! ## Endpoints
//!
//! ### Service
//!
//! - [`root`] - Welcome message
//! - [`health`] - Health check with service name and version
//!
//! ### Spotify
//!
//! - [`login`] - Builds the Spotify authorization URL and a fresh `state`
//! - [`callback`] - Exchanges the authorization code for an access token
//! - [`status`] - Connectivity check for a given access token
//! - [`top_tracks`] - The caller's top tracks, enriched with artist genres
//!
//! ## Errors
//!
//! Handlers return [`crate::error::Result`]. Failures are rendered as
//! `{"detail": "..."}` with 400 for caller-side problems (missing or invalid
//! parameters, a token Spotify rejects) and 500 for token exchange and
//! server-side problems.
//!
//! Query strings are read through [`ApiQuery`], so a query that fails to
//! deserialize gets the same JSON body instead of axum's plain-text
//! rejection.
//!
//! ## State
//!
//! The only router state is the read-only [`crate::config::SpotifyConfig`].
//! Access tokens travel in the query string of each request and are never
//! kept between requests.

mod callback;
mod health;
mod login;
mod query;
mod status;
mod top_tracks;

pub use callback::callback;
pub use health::{health, root};
pub use login::login;
pub use query::ApiQuery;
pub use status::status;
pub use top_tracks::top_tracks;
