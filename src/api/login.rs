use axum::{
    Extension,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{server::LoginState, spotify, utils, warning};

pub async fn home() -> Html<&'static str> {
    Html(
        "<h2>Spotify language sorter</h2>\
         <p>Visit <a href=\"/start\">/start</a> to log in and sort your library.</p>",
    )
}

pub async fn start(Extension(state): Extension<LoginState>) -> Response {
    let oauth_state = utils::generate_oauth_state();
    {
        let mut lock = state.oauth_state.lock().await;
        *lock = Some(oauth_state.clone());
    }

    match spotify::auth::authorize_url(&oauth_state) {
        Ok(url) => Redirect::temporary(&url).into_response(),
        Err(e) => {
            warning!("Failed to build authorization URL: {}", e);
            Html("<h4>Login failed.</h4>").into_response()
        }
    }
}
