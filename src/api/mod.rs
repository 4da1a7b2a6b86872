//! # API Module
//!
//! HTTP endpoints for the local login-flow server. The web layer is
//! deliberately thin: it obtains an authorization code from Spotify's
//! redirect and hands it to the serve loop, which owns the actual
//! synchronization. No outcome is reported back to the browser beyond a
//! static acknowledgment page; progress lives in the server logs.
//!
//! ## Endpoints
//!
//! - [`home`] - Landing page linking to the login flow
//! - [`start`] - Issues a fresh OAuth `state` and redirects to Spotify's
//!   authorization page
//! - [`code`] - Receives Spotify's redirect, checks the `state` echo and
//!   pushes the authorization code into the serve loop's channel
//! - [`health`] - Status endpoint for monitoring
//!
//! ## Related Modules
//!
//! - [`crate::server`] - Router setup and the shared [`crate::server::LoginState`]
//! - [`crate::sorter`] - The run each received code triggers

mod callback;
mod health;
mod login;

pub use callback::code;
pub use health::health;
pub use login::home;
pub use login::start;
