use serde_json::Value;

use crate::{
    spotify::api::{SpotifyApi, Verb},
    types::{AddTracksRequest, CreatePlaylistRequest, Playlist, PlaylistObject, RemoveTracksRequest, RemoveTrackUri},
    warning,
};

/// Per-request ceiling the removal endpoint enforces.
pub const REMOVE_CHUNK: usize = 50;

/// Per-request ceiling the addition endpoint enforces.
pub const ADD_CHUNK: usize = 90;

/// Retrieves every playlist owned by or followed by the user.
///
/// Pages through `users/{user_id}/playlists` and keeps only the name and
/// id of each playlist. The reconcile step uses the names to decide which
/// languages already have a playlist.
///
/// # Error Handling
///
/// Items that do not deserialize into the expected playlist shape are
/// logged and dropped. Only a failure of the initial total query is
/// returned as an error.
pub async fn playlists(api: &SpotifyApi) -> Result<Vec<Playlist>, reqwest::Error> {
    let endpoint = format!("users/{}/playlists", api.user_id());
    let items = api.fetch_all(&endpoint).await?;

    let mut playlists = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<PlaylistObject>(item) {
            Ok(playlist) => playlists.push(Playlist {
                name: playlist.name,
                id: playlist.id,
            }),
            Err(e) => {
                warning!("Dropping malformed playlist item: {}", e);
            }
        }
    }

    Ok(playlists)
}

/// Removes every track from a playlist.
///
/// The removal endpoint caps one request at [`REMOVE_CHUNK`] URIs, so the
/// playlist shrinks in rounds: each iteration re-queries the current
/// `total` with a fresh `GET`, fetches the next up-to-50 member URIs and
/// issues one removal request for exactly those URIs. Re-querying instead
/// of trusting a count taken at entry keeps the loop from under- or
/// over-iterating while the remote collection shrinks underneath it, at
/// the cost of one extra request per round.
///
/// # Errors
///
/// Any failing request ends the emptying early and is returned; the
/// playlist keeps whatever tracks were not yet removed. Bailing out is
/// deliberate, since retrying a failing removal with an unchanged `total`
/// would loop forever.
pub async fn empty_playlist(api: &SpotifyApi, playlist_id: &str) -> Result<(), reqwest::Error> {
    let endpoint = format!("playlists/{}/tracks", playlist_id);

    loop {
        let total = api.get_json(&endpoint, None).await?["total"]
            .as_u64()
            .unwrap_or(0);
        if total == 0 {
            return Ok(());
        }

        let params = [("limit", REMOVE_CHUNK.to_string())];
        let page = api.get_json(&endpoint, Some(&params)).await?;
        let uris: Vec<RemoveTrackUri> = page["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item["track"]["uri"].as_str())
                    .map(|uri| RemoveTrackUri {
                        uri: uri.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        if uris.is_empty() {
            // Non-zero total but no readable URIs; nothing left to delete.
            return Ok(());
        }

        let body = serde_json::to_value(RemoveTracksRequest { tracks: uris })
            .unwrap_or(Value::Null);
        api.call(Verb::Delete, &endpoint, None, Some(body)).await?;
    }
}

/// Appends tracks to an existing playlist in API-sized batches.
///
/// Splits `uris` into chunks of [`ADD_CHUNK`] and issues one append
/// request per chunk in input order. No `position` is sent; each chunk
/// lands at the end of the playlist, so the final order matches `uris`
/// when the playlist was emptied beforehand. An empty `uris` is a no-op.
///
/// # Returns
///
/// `true` when every chunk was accepted. A failing chunk is logged and
/// the remaining chunks are still attempted, with `false` returned at the
/// end; the playlist is left with whatever chunks did land.
pub async fn update_playlist(api: &SpotifyApi, playlist_id: &str, uris: &[String]) -> bool {
    let endpoint = format!("playlists/{}/tracks", playlist_id);
    let mut complete = true;

    for chunk in uris.chunks(ADD_CHUNK) {
        let body = serde_json::to_value(AddTracksRequest {
            uris: chunk.to_vec(),
            position: None,
        })
        .unwrap_or(Value::Null);

        if let Err(e) = api.call(Verb::Post, &endpoint, None, Some(body)).await {
            warning!("Failed to add {} tracks to playlist {}: {}", chunk.len(), playlist_id, e);
            complete = false;
        }
    }

    complete
}

/// Creates a private playlist and populates it.
///
/// Creates the playlist under the current user, then appends `uris` in
/// chunks of [`ADD_CHUNK`] with an explicit `position = chunk_index * 90`
/// so the final playlist order matches `uris` exactly.
///
/// # Returns
///
/// `false` as soon as either the creation response carries no playlist id
/// or any chunked append comes back non-success; no further requests are
/// issued and no cleanup of the partially created playlist is attempted.
/// `true` when the playlist was created and every chunk landed.
pub async fn create_playlist(api: &SpotifyApi, name: &str, uris: &[String]) -> bool {
    let endpoint = format!("users/{}/playlists", api.user_id());
    let body = serde_json::to_value(CreatePlaylistRequest {
        name: name.to_string(),
        public: false,
    })
    .unwrap_or(Value::Null);

    let created: Value = match api.call(Verb::Post, &endpoint, None, Some(body)).await {
        Ok(response) => match response.json().await {
            Ok(json) => json,
            Err(e) => {
                warning!("Failed to parse create response for playlist {}: {}", name, e);
                return false;
            }
        },
        Err(e) => {
            warning!("Failed to create playlist {}, skipping: {}", name, e);
            return false;
        }
    };

    let playlist_id = match created["id"].as_str() {
        Some(id) => id.to_string(),
        None => {
            warning!("Create response for playlist {} carried no id, skipping", name);
            return false;
        }
    };

    let tracks_endpoint = format!("playlists/{}/tracks", playlist_id);
    for (index, chunk) in uris.chunks(ADD_CHUNK).enumerate() {
        let body = serde_json::to_value(AddTracksRequest {
            uris: chunk.to_vec(),
            position: Some(index * ADD_CHUNK),
        })
        .unwrap_or(Value::Null);

        if let Err(e) = api
            .call(Verb::Post, &tracks_endpoint, None, Some(body))
            .await
        {
            warning!("Failed to add tracks to playlist {}: {}", name, e);
            return false;
        }
    }

    true
}
