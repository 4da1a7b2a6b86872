use std::collections::BTreeMap;

use rand::{Rng, distr::Alphanumeric};

use crate::types::Track;

/// Page size the Spotify listing endpoints serve at most.
pub const PAGE_SIZE: usize = 50;

pub fn generate_oauth_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Number of pages needed to cover `total` items at [`PAGE_SIZE`].
///
/// Always at least one page, so a listing with fewer items than one page
/// (including an empty one) still issues a single request to collect them.
pub fn page_count(total: usize) -> usize {
    std::cmp::max(1, total.div_ceil(PAGE_SIZE))
}

/// Groups track URIs by detected language, preserving track order within
/// each language. Tracks that somehow escaped the resolver fall into the
/// `unidentified` bucket rather than being dropped.
pub fn group_by_language(tracks: &[Track]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for track in tracks {
        let language = track
            .language
            .as_deref()
            .unwrap_or(crate::genius::UNIDENTIFIED);
        groups
            .entry(language.to_string())
            .or_default()
            .push(track.uri.clone());
    }
    groups
}
