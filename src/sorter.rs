//! The redistribution run.
//!
//! A single pass with no state carried across runs: authorize, collect the
//! saved tracks, detect their languages, group the track URIs by language,
//! inventory the existing playlists and then reconcile one playlist per
//! language. A language that already has a playlist of the same name gets
//! it emptied and refilled; any other language gets a fresh private
//! playlist. There is no rollback; a playlist left half-populated by a
//! mid-run failure stays that way and the remaining languages are still
//! processed.

use std::collections::HashMap;

use crate::{
    genius, info,
    spotify::{api::SpotifyApi, playlists, tracks},
    success, utils, warning,
};

/// Runs one full synchronization for the given authorization code.
///
/// # Errors
///
/// Only two failures abort a run, both before any playlist is mutated:
/// a failed authorization (token exchange or user lookup) and a failed
/// initial listing query. Everything later is degraded to warnings and
/// the run keeps going.
pub async fn run(code: &str) -> Result<(), String> {
    info!("Synchronization run started");

    let api = SpotifyApi::authorize(code).await?;
    info!("Authorized as user {}", api.user_id());

    let tracks = tracks::saved_tracks(&api)
        .await
        .map_err(|e| format!("failed to list saved tracks: {}", e))?;
    info!("Fetched {} saved tracks", tracks.len());

    let tracks = genius::resolve_languages(tracks).await;
    let groups = utils::group_by_language(&tracks);
    info!("Detected {} languages", groups.len());

    let existing: HashMap<String, String> = playlists::playlists(&api)
        .await
        .map_err(|e| format!("failed to list playlists: {}", e))?
        .into_iter()
        .map(|playlist| (playlist.name, playlist.id))
        .collect();

    for (language, uris) in &groups {
        match existing.get(language) {
            Some(playlist_id) => {
                info!("Rebuilding playlist {} ({} tracks)", language, uris.len());
                if let Err(e) = playlists::empty_playlist(&api, playlist_id).await {
                    warning!("Failed to fully empty playlist {}: {}", language, e);
                }
                if playlists::update_playlist(&api, playlist_id, uris).await {
                    success!("Playlist {} rebuilt", language);
                }
            }
            None => {
                info!("Creating playlist {} ({} tracks)", language, uris.len());
                if playlists::create_playlist(&api, language, uris).await {
                    success!("Playlist {} created", language);
                }
            }
        }
    }

    success!("Synchronization run finished");
    Ok(())
}
