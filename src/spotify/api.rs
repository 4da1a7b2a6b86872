use reqwest::{Client, Response};
use serde_json::Value;

use crate::{config, spotify::auth, utils, warning};

/// HTTP verbs the Spotify resource endpoints are called with.
///
/// The mutation and listing code names its operation through this enum and
/// [`SpotifyApi::call`] maps each variant onto the matching `reqwest`
/// request builder, so there is exactly one dispatch table for outbound
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Delete,
}

/// Authorized Spotify Web API client.
///
/// Carries the HTTP client, the bearer token obtained from the code
/// exchange and the current user's id. The token is read-only after
/// construction and may be shared freely by concurrent lookups.
pub struct SpotifyApi {
    http: Client,
    token: String,
    user_id: String,
}

impl SpotifyApi {
    /// Exchanges an authorization code and resolves the current user.
    ///
    /// Performs the token exchange ([`auth::exchange_code`]) and then a
    /// `GET me` to learn the user id that playlist listing and creation
    /// endpoints are addressed with.
    ///
    /// # Errors
    ///
    /// Fails if either the token exchange or the profile lookup fails.
    /// Both are fatal to the synchronization run; nothing has been
    /// mutated at this point.
    pub async fn authorize(code: &str) -> Result<Self, String> {
        let token = auth::exchange_code(code).await?;
        let http = Client::new();

        let me = http
            .get(format!("{}/me", config::spotify_api_url()))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json::<Value>()
            .await
            .map_err(|e| e.to_string())?;

        let user_id = match me["id"].as_str() {
            Some(id) => id.to_string(),
            None => return Err(format!("profile response carried no id: {}", me)),
        };

        Ok(SpotifyApi {
            http,
            token,
            user_id,
        })
    }

    /// Spotify id of the authorized user.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Issues one request against a resource endpoint.
    ///
    /// Builds `{api_url}/{endpoint}` with the bearer token attached,
    /// optional query parameters and an optional JSON body, and converts
    /// non-success statuses into errors so every caller sees a failed
    /// mutation or listing as `Err`.
    ///
    /// # Arguments
    ///
    /// * `verb` - Which HTTP verb to use, see [`Verb`]
    /// * `endpoint` - Path relative to the API base URL, without leading slash
    /// * `params` - Optional query parameters
    /// * `body` - Optional JSON request body
    pub async fn call(
        &self,
        verb: Verb,
        endpoint: &str,
        params: Option<&[(&str, String)]>,
        body: Option<Value>,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}/{}", config::spotify_api_url(), endpoint);

        let mut request = match verb {
            Verb::Get => self.http.get(&url),
            Verb::Post => self.http.post(&url),
            Verb::Delete => self.http.delete(&url),
        };
        request = request.bearer_auth(&self.token);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        request.send().await?.error_for_status()
    }

    /// `GET` an endpoint and parse the response body as JSON.
    pub async fn get_json(
        &self,
        endpoint: &str,
        params: Option<&[(&str, String)]>,
    ) -> Result<Value, reqwest::Error> {
        self.call(Verb::Get, endpoint, params, None)
            .await?
            .json::<Value>()
            .await
    }

    /// Retrieves the complete item collection behind a paginated endpoint.
    ///
    /// Issues one request to learn the reported `total`, computes the page
    /// count as `max(1, ceil(total / 50))` and then requests every page
    /// with `offset = page * 50, limit = 50`, concatenating the `items`
    /// arrays in page order.
    ///
    /// # Failure Policy
    ///
    /// A failing page request is logged and skipped, so the result may be
    /// incomplete rather than the whole listing failing. Only a failure of
    /// the initial total query is returned as an error.
    ///
    /// # Edge Cases
    ///
    /// - `total` below one page (or zero) still issues a single page request.
    /// - A `total` that is not a multiple of 50 needs no special casing;
    ///   the remote API truncates the final page.
    pub async fn fetch_all(&self, endpoint: &str) -> Result<Vec<Value>, reqwest::Error> {
        let total = self.get_json(endpoint, None).await?["total"]
            .as_u64()
            .unwrap_or(0) as usize;

        // Capacity grows with the pages actually received; `total` is
        // remote-reported and must not size an up-front allocation.
        let mut items: Vec<Value> = Vec::new();
        for page in 0..utils::page_count(total) {
            let params = [
                ("offset", (page * utils::PAGE_SIZE).to_string()),
                ("limit", utils::PAGE_SIZE.to_string()),
            ];
            match self.get_json(endpoint, Some(&params)).await {
                Ok(json) => {
                    if let Some(page_items) = json["items"].as_array() {
                        items.extend(page_items.iter().cloned());
                    }
                }
                Err(e) => {
                    warning!("Skipping page {} of {}: {}", page, endpoint, e);
                }
            }
        }

        Ok(items)
    }
}
