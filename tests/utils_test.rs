use splang::types::Track;
use splang::utils::*;

// Helper function to create a test track
fn create_test_track(title: &str, artist: &str, uri: &str, language: Option<&str>) -> Track {
    Track {
        title: title.to_string(),
        artist: artist.to_string(),
        uri: uri.to_string(),
        language: language.map(str::to_string),
    }
}

#[test]
fn test_generate_oauth_state() {
    let state = generate_oauth_state();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated states should be different
    let state2 = generate_oauth_state();
    assert_ne!(state, state2);
}

#[test]
fn test_page_count_covers_every_item() {
    // Fewer items than one page still needs one request
    assert_eq!(page_count(0), 1);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(24), 1);
    assert_eq!(page_count(49), 1);

    // Exact multiples
    assert_eq!(page_count(50), 1);
    assert_eq!(page_count(100), 2);

    // Partial trailing page gets its own request; 120 items must not be
    // truncated to two pages
    assert_eq!(page_count(51), 2);
    assert_eq!(page_count(120), 3);
    assert_eq!(page_count(215), 5);
}

#[test]
fn test_page_count_never_strands_items() {
    for total in 0..500 {
        let pages = page_count(total);
        assert!(pages * PAGE_SIZE >= total, "total={total} pages={pages}");
        assert!(pages >= 1);
        // No page beyond the last is ever needed
        if total > PAGE_SIZE {
            assert!((pages - 1) * PAGE_SIZE < total);
        }
    }
}

#[test]
fn test_group_by_language_preserves_order() {
    let tracks = vec![
        create_test_track("One", "A", "uri:1", Some("english")),
        create_test_track("Two", "B", "uri:2", Some("spanish")),
        create_test_track("Three", "C", "uri:3", Some("english")),
        create_test_track("Four", "D", "uri:4", Some("unidentified")),
        create_test_track("Five", "E", "uri:5", Some("english")),
    ];

    let groups = group_by_language(&tracks);

    assert_eq!(groups.len(), 3);
    assert_eq!(
        groups["english"],
        vec!["uri:1".to_string(), "uri:3".to_string(), "uri:5".to_string()]
    );
    assert_eq!(groups["spanish"], vec!["uri:2".to_string()]);
    assert_eq!(groups["unidentified"], vec!["uri:4".to_string()]);
}

#[test]
fn test_group_by_language_unresolved_falls_back() {
    // A track the resolver never touched must not be dropped
    let tracks = vec![create_test_track("One", "A", "uri:1", None)];

    let groups = group_by_language(&tracks);
    assert_eq!(groups["unidentified"], vec!["uri:1".to_string()]);
}

#[test]
fn test_group_by_language_round_trip() {
    let tracks: Vec<Track> = (0..137)
        .map(|i| {
            let language = match i % 3 {
                0 => "english",
                1 => "spanish",
                _ => "unidentified",
            };
            create_test_track(
                &format!("Track {i}"),
                "Artist",
                &format!("uri:{i}"),
                Some(language),
            )
        })
        .collect();

    let groups = group_by_language(&tracks);

    // Flattening the groups back yields every uri exactly once
    let mut flattened: Vec<String> = groups.values().flatten().cloned().collect();
    flattened.sort();
    let mut original: Vec<String> = tracks.iter().map(|t| t.uri.clone()).collect();
    original.sort();
    assert_eq!(flattened, original);
}

#[test]
fn test_group_by_language_empty_input() {
    let groups = group_by_language(&[]);
    assert!(groups.is_empty());
}
