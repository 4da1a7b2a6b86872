//! Language detection through the Genius lyrics-metadata API.
//!
//! For every saved track a free-text search is issued against the Genius
//! search endpoint and the language of the first hit is taken as the
//! track's language. Lookups fan out over a small pool of concurrent
//! in-flight requests and are collected back in submission order, so each
//! result is attributed to its originating track by position.

use futures::stream::{self, StreamExt};
use reqwest::Client;

use crate::{
    config,
    types::{GeniusSearchResponse, Track},
    warning,
};

/// Fallback language assigned whenever detection yields no usable result.
pub const UNIDENTIFIED: &str = "unidentified";

/// Concurrent in-flight lookups during the fan-out.
const LOOKUP_WORKERS: usize = 3;

/// Assigns a language to every track.
///
/// Dispatches one search per track, at most [`LOOKUP_WORKERS`] in flight
/// at a time, and joins the ordered results back onto the tracks. Every
/// returned track carries a language afterwards: the first hit's language
/// when the search produced one, [`UNIDENTIFIED`] when the search failed,
/// returned no hits or the hit carried a null language.
///
/// Lookups are never retried and no timeout is enforced beyond the HTTP
/// client default; a slow or failing Genius API degrades detection, never
/// the run.
pub async fn resolve_languages(mut tracks: Vec<Track>) -> Vec<Track> {
    let client = Client::new();
    let token = config::genius_api_token();

    // `buffered` (not `buffer_unordered`) keeps results in submission
    // order; attribution back onto the tracks is positional.
    let languages: Vec<Option<String>> = stream::iter(tracks.iter())
        .map(|track| lookup_language(&client, &token, track))
        .buffered(LOOKUP_WORKERS)
        .collect()
        .await;

    for (track, language) in tracks.iter_mut().zip(languages) {
        track.language = Some(language.unwrap_or_else(|| UNIDENTIFIED.to_string()));
    }

    tracks
}

/// Language of the first search hit, if any.
pub fn first_hit_language(response: &GeniusSearchResponse) -> Option<String> {
    response
        .response
        .hits
        .first()
        .and_then(|hit| hit.result.language.clone())
}

async fn lookup_language(client: &Client, token: &str, track: &Track) -> Option<String> {
    let url = format!("{}/search", config::genius_api_url());
    let query = format!("{} {}", track.title, track.artist);

    let response = match client
        .get(&url)
        .query(&[("q", query.as_str())])
        .bearer_auth(token)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warning!("Language lookup failed for {}: {}", track.title, e);
            return None;
        }
    };

    match response.json::<GeniusSearchResponse>().await {
        Ok(json) => first_hit_language(&json),
        Err(e) => {
            warning!(
                "Failed to parse search response for {}: {}",
                track.title,
                e
            );
            None
        }
    }
}
