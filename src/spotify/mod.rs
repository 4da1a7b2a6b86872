//! # Spotify Integration Module
//!
//! Raw Spotify Web API layer used by the sorter. It owns authentication,
//! the generic request/pagination plumbing and every endpoint-specific
//! operation; higher layers never touch `reqwest` for Spotify directly.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Authorization-code flow against the accounts service:
//! - **Authorize URL**: builds the redirect target for the `/start` endpoint
//! - **Token Exchange**: posts the callback code with Basic client
//!   credentials and extracts the bearer token
//!
//! ### API Client Module
//!
//! [`api`] - The authorized [`api::SpotifyApi`] client:
//! - **Verb Dispatch**: one [`api::Verb`] enum mapped onto `reqwest` builders
//! - **Paginated Listing**: `fetch_all` walks `offset`/`limit` pages off a
//!   reported `total`, skipping failed pages instead of aborting
//! - **User Identity**: resolves the current user id once at authorization
//!
//! ### Track Module
//!
//! [`tracks`] - Saved-tracks retrieval, turning raw listing items into
//! domain [`crate::types::Track`] values.
//!
//! ### Playlist Module
//!
//! [`playlists`] - Playlist inventory plus the batch mutator:
//! - **Inventory**: lists the user's playlists by name and id
//! - **Empty**: drains a playlist in 50-URI removal rounds against a fresh
//!   total
//! - **Update**: appends URIs in 90-item chunks, preserving input order
//! - **Create**: creates a private playlist and fills it with positioned
//!   90-item chunks, reporting success as a boolean
//!
//! ## Error Handling Philosophy
//!
//! Failures stay at the boundary where they occur: page failures degrade
//! to partial listings, mutation failures degrade to logged warnings or a
//! `false` result, and only authorization failures abort a run. Nothing in
//! this module panics on remote misbehavior.

pub mod api;
pub mod auth;
pub mod playlists;
pub mod tracks;
