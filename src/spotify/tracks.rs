use crate::{
    error::{Error, Result},
    spotify::SpotifyClient,
    types::{TopTracksPage, TrackRecord},
};

pub const TIME_RANGES: [&str; 3] = ["short_term", "medium_term", "long_term"];
pub const MAX_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Retrieves one page of the user's top tracks.
    ///
    /// Only the first page is read; Spotify's `next` link is ignored.
    /// `limit` must be within `1..=50` and `time_range` one of
    /// [`TIME_RANGES`]. When omitted, Spotify's defaults apply (20 tracks,
    /// `medium_term`).
    ///
    /// A page can name more distinct artists than the genre lookup accepts
    /// ([`MAX_IDS_PER_LOOKUP`]). Enriching such a page fails with
    /// [`Error::UpstreamLookup`]; keep `limit` low for tracks with many
    /// featured artists.
    ///
    /// [`MAX_IDS_PER_LOOKUP`]: crate::spotify::artists::MAX_IDS_PER_LOOKUP
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] for an out-of-range `limit` or unknown
    ///   `time_range`, before any request is sent
    /// - [`Error::UpstreamLookup`] for a rejected token, a non-success status,
    ///   a timeout or an undecodable page
    pub async fn top_tracks(
        &self,
        token: &str,
        limit: Option<u32>,
        time_range: Option<&str>,
    ) -> Result<Vec<TrackRecord>> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(Error::InvalidParameter {
                    name: "limit",
                    reason: format!("expected 1..={MAX_LIMIT}, got {limit}"),
                });
            }
            query.push(("limit", limit.to_string()));
        }
        if let Some(range) = time_range {
            if !TIME_RANGES.contains(&range) {
                return Err(Error::InvalidParameter {
                    name: "time_range",
                    reason: format!("expected one of {}, got {range:?}", TIME_RANGES.join(", ")),
                });
            }
            query.push(("time_range", range.to_string()));
        }

        let page: TopTracksPage = self.get_json("/me/top/tracks", &query, token).await?;
        Ok(page.items.into_iter().map(TrackRecord::from).collect())
    }
}
