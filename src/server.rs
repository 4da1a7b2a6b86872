use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::{Mutex, mpsc};

use crate::{api, config, error};

/// State shared with the login-flow handlers.
///
/// The `/code` callback hands received authorization codes to the serve
/// loop through the `codes` channel; `oauth_state` holds the state value
/// issued by the latest `/start` redirect so the callback can be tied to
/// the redirect that started it.
#[derive(Clone)]
pub struct LoginState {
    pub codes: mpsc::Sender<String>,
    pub oauth_state: Arc<Mutex<Option<String>>>,
}

pub async fn start_api_server(state: LoginState) {
    let app = Router::new()
        .route("/", get(api::home))
        .route("/health", get(api::health))
        .route("/start", get(api::start))
        .route("/code", get(api::code))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server failed: {}", e);
    }
}
