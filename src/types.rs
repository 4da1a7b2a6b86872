use serde::{Deserialize, Serialize};

/// A saved track together with its detected language.
///
/// `language` starts out as `None` after the fetch and is assigned exactly
/// once by the resolver, to either a real language or the
/// [`UNIDENTIFIED`](crate::genius::UNIDENTIFIED) fallback.
#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub uri: String,
    pub language: Option<String>,
}

/// Local proxy for a remote playlist. The remote API stays authoritative;
/// this only carries what the reconcile step needs to address it.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrackItem {
    pub track: TrackObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTracksRequest {
    pub tracks: Vec<RemoveTrackUri>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTrackUri {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeniusSearchResponse {
    pub response: GeniusHits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeniusHits {
    pub hits: Vec<GeniusHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeniusHit {
    pub result: GeniusResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeniusResult {
    pub language: Option<String>,
}
