use crate::{
    spotify::api::SpotifyApi,
    types::{SavedTrackItem, Track},
    warning,
};

/// Retrieves every track the user has saved to their library.
///
/// Pages through `me/tracks` with [`SpotifyApi::fetch_all`] and builds one
/// [`Track`] per item, carrying the title, the primary (first listed)
/// artist and the track URI. The language field starts out unset; the
/// resolver assigns it later.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - All saved tracks, possibly incomplete if a page
///   request was skipped
/// - `Err(reqwest::Error)` - Failure of the initial total query
///
/// # Error Handling
///
/// Items that do not deserialize into the expected saved-track shape are
/// logged and dropped rather than failing the whole listing.
pub async fn saved_tracks(api: &SpotifyApi) -> Result<Vec<Track>, reqwest::Error> {
    let items = api.fetch_all("me/tracks").await?;

    let mut tracks = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<SavedTrackItem>(item) {
            Ok(saved) => {
                let artist = saved
                    .track
                    .artists
                    .first()
                    .map(|a| a.name.clone())
                    .unwrap_or_default();
                tracks.push(Track {
                    title: saved.track.name,
                    artist,
                    uri: saved.track.uri,
                    language: None,
                });
            }
            Err(e) => {
                warning!("Dropping malformed saved-track item: {}", e);
            }
        }
    }

    Ok(tracks)
}
