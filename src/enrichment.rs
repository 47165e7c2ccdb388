//! Genre enrichment of a top-tracks page.

use std::collections::{BTreeSet, HashSet};

use crate::{
    error::Result,
    spotify::GenreSource,
    types::{ArtistGenres, ArtistId, EnrichedTrack, TrackRecord},
};

/// Joins artist genres onto every track of a page.
///
/// All artist identifiers of the page are collected into one set first, so
/// `genres` is asked exactly once no matter how many tracks share an artist.
/// A page without any artist never reaches `genres` at all.
///
/// The output has one entry per input track, in input order, with the
/// artists' display names in their original order. A track's genres are the
/// union of its artists' genre lists without duplicates; artists the lookup
/// knows nothing about contribute nothing.
///
/// # Errors
///
/// Any error from `genres` aborts the whole page and is returned unchanged.
/// There is no retry and no partial result.
pub async fn aggregate<G: GenreSource>(
    tracks: Vec<TrackRecord>,
    genres: &G,
    token: &str,
) -> Result<Vec<EnrichedTrack>> {
    let artist_ids: BTreeSet<ArtistId> = tracks
        .iter()
        .flat_map(|track| track.artists.iter().map(|artist| artist.id.clone()))
        .collect();

    let artist_genres = if artist_ids.is_empty() {
        ArtistGenres::new()
    } else {
        genres.resolve(&artist_ids, token).await?
    };

    Ok(tracks
        .into_iter()
        .map(|track| enrich(track, &artist_genres))
        .collect())
}

fn enrich(track: TrackRecord, artist_genres: &ArtistGenres) -> EnrichedTrack {
    let genres: HashSet<String> = track
        .artists
        .iter()
        .filter_map(|artist| artist_genres.get(&artist.id))
        .flatten()
        .cloned()
        .collect();

    EnrichedTrack {
        name: track.name,
        artists: track.artists.into_iter().map(|artist| artist.name).collect(),
        popularity: track.popularity,
        genres,
        spotify_link: track.spotify_link,
        image_url: track.image_url,
    }
}
