//! Connectivity check against the current user's profile.

use serde_json::Value;

use crate::spotify::SpotifyClient;

impl SpotifyClient {
    /// Checks a token with a single authenticated `GET /me`.
    ///
    /// The profile body itself is discarded; only the outcome matters. The
    /// returned pair is `(connected, message)`:
    ///
    /// - `(true, "Spotify API is reachable.")` on any success status
    /// - `(false, <error>)` otherwise, where the message is the rendered
    ///   [`crate::error::Error`], e.g. the reason Spotify gave for a 401
    ///
    /// Never fails: an expired token or a timeout is an answer here, not an
    /// error, so the status route can always respond with 200.
    pub async fn check_status(&self, token: &str) -> (bool, String) {
        match self.get_json::<Value>("/me", &[], token).await {
            Ok(_) => (true, "Spotify API is reachable.".to_string()),
            Err(e) => (false, e.to_string()),
        }
    }
}
