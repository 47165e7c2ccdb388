use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Spotify artist identifier, e.g. `0OdUWJ0sBjDrqHygGUXeCF`.
pub type ArtistId = String;

/// Genre tags per artist, as returned by the bulk artists lookup.
pub type ArtistGenres = HashMap<ArtistId, Vec<String>>;

/// Successful reply of the accounts service token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Error envelope of the Web API: `{"error": {"status": .., "message": ..}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksPage {
    #[serde(default)]
    pub items: Vec<TopTrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTrackItem {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: ArtistId,
    pub name: String,
}

/// One entry of a top-tracks page, reduced to what enrichment needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub popularity: u8,
    pub spotify_link: Option<String>,
    pub image_url: Option<String>,
}

impl From<TopTrackItem> for TrackRecord {
    fn from(item: TopTrackItem) -> TrackRecord {
        // Spotify lists album images widest first.
        let image_url = item
            .album
            .and_then(|album| album.images.into_iter().last())
            .map(|image| image.url);

        TrackRecord {
            name: item.name,
            artists: item.artists,
            popularity: item.popularity,
            spotify_link: item.external_urls.spotify,
            image_url,
        }
    }
}

/// Reply of `GET /artists?ids=`. Unknown identifiers come back as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeveralArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Option<ArtistGenresItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistGenresItem {
    pub id: ArtistId,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// A track as served by the top tracks route, with the union of its
/// artists' genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedTrack {
    pub name: String,
    pub artists: Vec<String>,
    pub popularity: u8,
    pub genres: HashSet<String>,
    pub spotify_link: Option<String>,
    pub image_url: Option<String>,
}

/// Query parameters accepted by the top tracks endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopTracksQuery {
    pub access_token: Option<String>,
    pub limit: Option<u32>,
    pub time_range: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub access_token: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub spotify_connected: bool,
    pub message: String,
    pub next_steps: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopTracksResponse {
    pub top_tracks: Vec<EnrichedTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    pub authorize_url: String,
    pub state: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
