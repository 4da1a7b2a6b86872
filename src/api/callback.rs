use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{server::LoginState, warning};

pub async fn code(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<LoginState>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Failed to obtain code from Spotify API.</h4>");
    };

    // Take the expected state so a replayed callback cannot reuse it.
    let expected = state.oauth_state.lock().await.take();
    if expected.is_none() || params.get("state") != expected.as_ref() {
        warning!("Rejecting callback with unknown or missing state");
        return Html("<h4>Login failed.</h4>");
    }

    if state.codes.send(code.clone()).await.is_err() {
        warning!("Serve loop is gone, dropping authorization code");
        return Html("<h4>Login failed.</h4>");
    }

    Html("<h2>Login successful.</h2><p>Sorting started, you can close this window.</p>")
}
