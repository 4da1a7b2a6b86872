use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use crate::{config, info, server::{LoginState, start_api_server}, sorter, warning};

/// Runs the login-flow server and supervises synchronization runs.
///
/// Starts the local HTTP server, opens the login page in the browser and
/// then waits on the code channel. Each authorization code delivered by
/// the `/code` callback triggers exactly one synchronization run; runs
/// execute sequentially on this task while the server stays responsive on
/// its own. A failed run is logged and the loop keeps waiting for the
/// next login.
pub async fn serve() {
    let (codes, mut runs) = mpsc::channel::<String>(4);
    let state = LoginState {
        codes,
        oauth_state: Arc::new(Mutex::new(None)),
    };

    tokio::spawn(async move {
        start_api_server(state).await;
    });

    let start_url = format!("http://{}/start", config::server_addr());
    info!("Login flow listening on http://{}", config::server_addr());
    if webbrowser::open(&start_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            start_url
        );
    }

    while let Some(code) = runs.recv().await {
        if let Err(e) = sorter::run(&code).await {
            warning!("Synchronization run failed: {}", e);
        }
    }
}
