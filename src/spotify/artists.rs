use std::{collections::BTreeSet, future::Future};

use crate::{
    error::{Error, Result},
    spotify::SpotifyClient,
    types::{ArtistGenres, ArtistId, SeveralArtistsResponse},
};

/// Most identifiers Spotify accepts in one `GET /artists?ids=` call.
pub const MAX_IDS_PER_LOOKUP: usize = 50;

/// Source of genre tags for a set of artists.
///
/// [`SpotifyClient`] is the production implementation. The seam exists so
/// aggregation can be driven by anything that resolves genres in bulk.
pub trait GenreSource {
    /// Resolves the genres of every artist in `artist_ids` with a single
    /// bulk lookup.
    ///
    /// Artists the upstream does not know about are left out of the map;
    /// callers treat a missing entry as an empty genre list.
    fn resolve(
        &self,
        artist_ids: &BTreeSet<ArtistId>,
        token: &str,
    ) -> impl Future<Output = Result<ArtistGenres>> + Send;
}

impl GenreSource for SpotifyClient {
    /// Fetches genres for several artists through `GET /artists?ids=`.
    ///
    /// The identifiers are sent comma-joined in one request, never one
    /// request per artist. Spotify answers with `null` for identifiers it
    /// cannot find; those and any artist missing from the reply simply have
    /// no entry in the returned map.
    ///
    /// At most [`MAX_IDS_PER_LOOKUP`] identifiers fit in one call. A larger
    /// set is refused up front rather than split across requests.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UpstreamLookup`] when `artist_ids` exceeds
    /// [`MAX_IDS_PER_LOOKUP`] (nothing is sent), and on a non-success
    /// status, a timeout or a body that is not a several-artists payload.
    /// No partial map is ever returned.
    async fn resolve(&self, artist_ids: &BTreeSet<ArtistId>, token: &str) -> Result<ArtistGenres> {
        if artist_ids.len() > MAX_IDS_PER_LOOKUP {
            return Err(Error::UpstreamLookup {
                status: None,
                detail: format!(
                    "{} distinct artists exceed Spotify's limit of {MAX_IDS_PER_LOOKUP} ids per lookup",
                    artist_ids.len()
                ),
            });
        }

        let ids = artist_ids
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let res: SeveralArtistsResponse = self
            .get_json("/artists", &[("ids", ids)], token)
            .await?;

        Ok(res
            .artists
            .into_iter()
            .flatten()
            .map(|artist| (artist.id, artist.genres))
            .collect())
    }
}
