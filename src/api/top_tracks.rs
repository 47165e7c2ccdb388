use axum::{Json, extract::State};

use crate::{
    api::ApiQuery,
    config::SpotifyConfig,
    enrichment,
    error::{Error, Result},
    info,
    spotify::SpotifyClient,
    types::{TopTracksQuery, TopTracksResponse},
    warning,
};

/// `GET /api/spotify/top-tracks?access_token=...[&limit=..][&time_range=..]`
///
/// Reads one page of the caller's top tracks and enriches it with artist
/// genres. The genre lookup only starts once the page is in hand, since it
/// needs the page's artist identifiers.
pub async fn top_tracks(
    State(config): State<SpotifyConfig>,
    ApiQuery(params): ApiQuery<TopTracksQuery>,
) -> Result<Json<TopTracksResponse>> {
    let Some(token) = params.access_token.filter(|t| !t.is_empty()) else {
        return Err(Error::MissingParameter("access_token"));
    };

    let client = SpotifyClient::new(config)?;
    let result = async {
        let records = client
            .top_tracks(&token, params.limit, params.time_range.as_deref())
            .await?;
        enrichment::aggregate(records, &client, &token).await
    }
    .await;

    match result {
        Ok(top_tracks) => {
            info!("Served {} enriched top tracks", top_tracks.len());
            Ok(Json(TopTracksResponse { top_tracks }))
        }
        Err(e) => {
            warning!("Top tracks request failed: {}", e);
            Err(e)
        }
    }
}
