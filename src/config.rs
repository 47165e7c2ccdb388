//! Configuration management for the Isoca Spot service.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Lookup order for the file:
//! 1. The path passed on the command line (`--env-file`)
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory under `isoca-spot/`
//!
//! Variables already present in the process environment always win, since
//! `dotenv` never overrides them.

use std::{env, path::PathBuf, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_SCOPE: &str = "user-top-read user-read-private";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file.
///
/// An explicitly requested file must exist and parse. The implicit
/// locations are optional and silently skipped when absent.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if `path` is given and cannot be loaded.
pub fn load_env(path: Option<PathBuf>) -> Result<()> {
    if let Some(path) = path {
        dotenv::from_path(&path).map_err(|e| {
            Error::Configuration(format!("cannot load {}: {}", path.display(), e))
        })?;
        return Ok(());
    }

    if dotenv::dotenv().is_ok() {
        return Ok(());
    }

    let data_env = data_env_path();
    if data_env.is_file() {
        dotenv::from_path(&data_env).map_err(|e| {
            Error::Configuration(format!("cannot load {}: {}", data_env.display(), e))
        })?;
    }

    Ok(())
}

/// Location of the per-user `.env` file, e.g. `~/.local/share/isoca-spot/.env`.
pub fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("isoca-spot/.env");
    path
}

/// Returns the address the HTTP server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Immutable Spotify client settings.
///
/// Shared read-only across requests. Nothing user-specific lives here: every
/// request builds its own [`crate::spotify::SpotifyClient`] from a clone and
/// brings its own access token.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub timeout: Duration,
}

impl SpotifyConfig {
    /// Reads the Spotify settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when `SPOTIFY_CLIENT_ID`,
    /// `SPOTIFY_CLIENT_SECRET` or `SPOTIFY_REDIRECT_URI` is missing or blank
    /// (as in an unfilled copy of `.env.example`), or when
    /// `SPOTIFY_API_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self> {
        let timeout = match env::var("SPOTIFY_API_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                Error::Configuration(format!("SPOTIFY_API_TIMEOUT_SECS={raw:?}: {e}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            scope: optional("SPOTIFY_SCOPE", DEFAULT_SCOPE),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL),
            auth_url: optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            timeout: Duration::from_secs(timeout),
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Configuration(format!("{name} must be set")))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
