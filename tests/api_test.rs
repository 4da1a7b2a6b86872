//! Integration tests for the Spotify API layer against a local mock server.
//!
//! The API base and token URLs are env-driven, so each test points them at
//! its own `wiremock` server and drives the real request paths: paginated
//! listing with skipped pages, chunked appends and the create-playlist
//! early-out.

use std::sync::{Mutex, MutexGuard, OnceLock};

use serde_json::json;
use splang::spotify::{api::SpotifyApi, playlists};
use wiremock::matchers::{body_partial_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The environment is process-global; tests that rewrite it take this lock
// so a parallel test never sees another server's URLs.
fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

fn point_env_at(server: &MockServer) {
    // set_var is unsafe in edition 2024; serialized through env_lock
    unsafe {
        std::env::set_var("SPOTIFY_CLIENT_ID", "test-client");
        std::env::set_var("SPOTIFY_CLIENT_SECRET", "test-secret");
        std::env::set_var("SPOTIFY_REDIRECT_URI", "http://127.0.0.1:5070/code");
        std::env::set_var("SPOTIFY_TOKEN_URL", format!("{}/api/token", server.uri()));
        std::env::set_var("SPOTIFY_API_URL", server.uri());
    }
}

// Mocks the token exchange and profile lookup and authorizes a client
async fn authorized_api(server: &MockServer) -> SpotifyApi {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "test-token" })),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "tester" })))
        .mount(server)
        .await;

    SpotifyApi::authorize("test-code").await.unwrap()
}

fn uris(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("spotify:track:{i}")).collect()
}

#[tokio::test]
async fn test_fetch_all_pages_in_order_and_skips_failed_pages() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_env_at(&server);
    let api = authorized_api(&server).await;

    // total query carries no offset/limit
    Mock::given(method("GET"))
        .and(path("/me/tracks"))
        .and(query_param_is_missing("offset"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "total": 120, "items": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    // 120 items at a page size of 50 need exactly three page requests
    Mock::given(method("GET"))
        .and(path("/me/tracks"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "total": 120, "items": ["a1", "a2"] })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me/tracks"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me/tracks"))
        .and(query_param("offset", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "total": 120, "items": ["c1"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let items = api.fetch_all("me/tracks").await.unwrap();

    // The failed middle page is omitted; the rest keeps page order
    assert_eq!(items, vec![json!("a1"), json!("a2"), json!("c1")]);
}

#[tokio::test]
async fn test_create_playlist_without_id_issues_no_appends() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_env_at(&server);
    let api = authorized_api(&server).await;

    // Creation succeeds at the HTTP level but yields no playlist id
    Mock::given(method("POST"))
        .and(path("/users/tester/playlists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "name": "english" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "s" })))
        .expect(0)
        .mount(&server)
        .await;

    assert!(!playlists::create_playlist(&api, "english", &uris(5)).await);
}

#[tokio::test]
async fn test_create_playlist_stops_after_failed_chunk() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_env_at(&server);
    let api = authorized_api(&server).await;

    Mock::given(method("POST"))
        .and(path("/users/tester/playlists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "pl1" })))
        .expect(1)
        .mount(&server)
        .await;
    // 215 uris would need three chunks, but the first append fails and
    // no further request may be issued
    Mock::given(method("POST"))
        .and(path("/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    assert!(!playlists::create_playlist(&api, "english", &uris(215)).await);
}

#[tokio::test]
async fn test_create_playlist_positions_every_chunk() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_env_at(&server);
    let api = authorized_api(&server).await;

    Mock::given(method("POST"))
        .and(path("/users/tester/playlists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "pl1" })))
        .expect(1)
        .mount(&server)
        .await;
    for position in [0, 90, 180] {
        Mock::given(method("POST"))
            .and(path("/playlists/pl1/tracks"))
            .and(body_partial_json(json!({ "position": position })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "s" })))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert!(playlists::create_playlist(&api, "english", &uris(215)).await);
}

#[tokio::test]
async fn test_update_playlist_attempts_every_chunk_and_reports_failure() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_env_at(&server);
    let api = authorized_api(&server).await;

    // Unlike creation, an update keeps going past a failed chunk
    Mock::given(method("POST"))
        .and(path("/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    assert!(!playlists::update_playlist(&api, "pl1", &uris(215)).await);
}

#[tokio::test]
async fn test_empty_playlist_drains_and_stops_at_zero() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_env_at(&server);
    let api = authorized_api(&server).await;

    // First fresh-total query sees two tracks, the one after the removal
    // sees none; mount order breaks the tie once the first is spent
    Mock::given(method("GET"))
        .and(path("/playlists/pl1/tracks"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 2, "items": [] })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlists/pl1/tracks"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "items": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlists/pl1/tracks"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "track": { "uri": "spotify:track:u1" } },
                { "track": { "uri": "spotify:track:u2" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/playlists/pl1/tracks"))
        .and(body_partial_json(json!({
            "tracks": [ { "uri": "spotify:track:u1" }, { "uri": "spotify:track:u2" } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "snapshot_id": "s" })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(playlists::empty_playlist(&api, "pl1").await.is_ok());
}
