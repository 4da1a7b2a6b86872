//! Spotify Language Sorter Library
//!
//! This library re-partitions a user's Spotify library into per-language
//! playlists. It fetches every saved track, detects each track's language
//! through the Genius lyrics-metadata API, groups the tracks by detected
//! language and then rebuilds one playlist per language: reusing and
//! refilling an existing playlist when one with the language's name already
//! exists, creating a fresh private one otherwise.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local login-flow server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `genius` - Language detection through the Genius search API
//! - `server` - Local HTTP server for the Spotify login flow
//! - `sorter` - The redistribution run tying everything together
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use splang::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> splang::Res<()> {
//!     config::load_env().await?;
//!     // Serve the login flow or run a sort directly...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod genius;
pub mod server;
pub mod sorter;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use splang::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Starting synchronization run...");
/// info!("Fetched {} saved tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Playlist {} rebuilt", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Reserved for unrecoverable
/// startup errors (missing configuration, unbindable server address); a
/// running synchronization never uses it; recoverable failures are reported
/// through [`warning!`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// recoverable issues such as a skipped page, a failed language lookup or a playlist
/// mutation that came back with a non-success status.
///
/// # Example
///
/// ```
/// warning!("Skipping page {}: {}", page, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
