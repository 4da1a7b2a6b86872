use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config;

/// OAuth scopes the sorter needs: reading the saved-tracks library and
/// reading/rewriting private playlists.
pub const SCOPE: &str = "user-library-read playlist-modify-private playlist-read-private";

/// Builds the Spotify authorization URL the login flow redirects to.
///
/// Constructs the standard authorization-code request against the
/// configured accounts endpoint, with every query value percent-encoded;
/// the scope list carries literal spaces and the redirect URI carries
/// reserved characters, so neither may be interpolated raw. The
/// caller-provided `state` value is echoed back by Spotify on the `/code`
/// callback and is checked there to tie the callback to the redirect that
/// started it.
///
/// # Arguments
///
/// * `state` - Opaque random value generated per login attempt
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The fully encoded authorization URL
/// - `Err(String)` - Description of why the configured authorization URL
///   did not parse as a base URL
///
/// # Example
///
/// ```
/// let url = authorize_url("N7rAnd0mStat3")?;
/// // redirect the browser to `url`
/// ```
pub fn authorize_url(state: &str) -> Result<String, String> {
    let url = Url::parse_with_params(
        &config::spotify_auth_url(),
        &[
            ("client_id", config::spotify_client_id()),
            ("response_type", "code".to_string()),
            ("redirect_uri", config::spotify_redirect_uri()),
            ("scope", SCOPE.to_string()),
            ("state", state.to_string()),
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(url.into())
}

/// Exchanges an authorization code for a bearer access token.
///
/// Posts the code to the configured token endpoint with the client
/// credentials encoded into a Basic authorization header, and pulls
/// `access_token` out of the JSON response.
///
/// # Arguments
///
/// * `code` - Authorization code received on the `/code` callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The bearer access token for subsequent API requests
/// - `Err(String)` - Description of the network failure or of a response
///   that carried no `access_token`
///
/// # Error Handling
///
/// A failed exchange is fatal to the synchronization run that requested
/// it: the caller aborts before any playlist is touched. Common failures
/// are an expired or already-used code, wrong client credentials, and a
/// redirect URI that does not match the registered one.
pub async fn exchange_code(code: &str) -> Result<String, String> {
    let credentials = STANDARD.encode(format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    ));

    let client = Client::new();
    let res = client
        .post(&config::spotify_token_url())
        .header("Authorization", format!("Basic {}", credentials))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    match json["access_token"].as_str() {
        Some(token) => Ok(token.to_string()),
        None => Err(format!("token response carried no access_token: {}", json)),
    }
}
