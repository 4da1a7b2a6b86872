//! Configuration management for the Spotify Language Sorter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! Genius API token, server settings and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `splang/.env`. This allows users to store
/// credentials outside of version control.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/splang/.env`
/// - macOS: `~/Library/Application Support/splang/.env`
/// - Windows: `%LOCALAPPDATA%/splang/.env`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created. A missing
/// `.env` file is tolerated so that configuration may also come entirely
/// from process environment variables.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("splang/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the server address for the local login-flow server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the local HTTP server should bind, e.g.
/// `127.0.0.1:5070`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Obtained when registering the application with Spotify's developer
/// platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Combined with the client ID into the Basic authorization header of the
/// token exchange request.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should never be exposed in logs or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// The callback URL Spotify redirects to after user authorization; must
/// match the redirect URI registered in the Spotify application settings
/// and point at this server's `/code` endpoint.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Base URL for Spotify's OAuth authorization endpoint, normally
/// `https://accounts.spotify.com/authorize`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_AUTH_URL` environment variable is not set.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").expect("SPOTIFY_AUTH_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// URL for exchanging authorization codes for access tokens, normally
/// `https://accounts.spotify.com/api/token`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_TOKEN_URL` environment variable is not set.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL").expect("SPOTIFY_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Base URL for all resource endpoints after authentication, normally
/// `https://api.spotify.com/v1`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Genius API base URL.
///
/// Base URL for the Genius search endpoint used for language detection,
/// normally `https://api.genius.com`.
///
/// # Panics
///
/// Panics if the `GENIUS_API_URL` environment variable is not set.
pub fn genius_api_url() -> String {
    env::var("GENIUS_API_URL").expect("GENIUS_API_URL must be set")
}

/// Returns the Genius API bearer token.
///
/// Client access token for the Genius API, attached to every search
/// request issued by the language resolver.
///
/// # Panics
///
/// Panics if the `GENIUS_API_TOKEN` environment variable is not set.
pub fn genius_api_token() -> String {
    env::var("GENIUS_API_TOKEN").expect("GENIUS_API_TOKEN must be set")
}
