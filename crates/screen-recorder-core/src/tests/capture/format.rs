use crate::{MIME_PREFERENCES, negotiate_format};

/// WHAT: The best-ranked format wins when everything is supported
/// WHY: VP9+Opus gives the best quality per bit
#[test]
fn given_host_supporting_everything_when_negotiating_then_vp9_selected() {
    // Given: A host that supports every preferred format
    let is_supported = |_: &str| true;

    // When: Negotiating
    let selected = negotiate_format(&MIME_PREFERENCES, is_supported);

    // Then: The first preference is chosen
    assert_eq!(selected, Some("video/webm;codecs=vp9,opus"));
}

/// WHAT: Selection is the first preference present in the supported subset
/// WHY: Negotiation must be deterministic and order-preserving
#[test]
fn given_subset_supported_when_negotiating_then_first_listed_member_selected() {
    // Given: A host supporting VP8 and the bare container only
    let supported = ["video/webm", "video/webm;codecs=vp8,opus"];
    let mut probes = Vec::new();

    // When: Negotiating
    let selected = negotiate_format(&MIME_PREFERENCES, |mime| {
        probes.push(mime.to_string());
        supported.contains(&mime)
    });

    // Then: VP8 wins and probing stopped right after it
    assert_eq!(selected, Some("video/webm;codecs=vp8,opus"));
    assert_eq!(
        probes,
        vec!["video/webm;codecs=vp9,opus", "video/webm;codecs=vp8,opus"]
    );
}

/// WHAT: A host with only the bare container still records
/// WHY: The generic container is the last-resort fallback
#[test]
fn given_generic_container_only_when_negotiating_then_last_entry_selected() {
    // Given: A host that only accepts the bare WebM container
    let mut probe_count = 0;

    // When: Negotiating
    let selected = negotiate_format(&MIME_PREFERENCES, |mime| {
        probe_count += 1;
        mime == "video/webm"
    });

    // Then: The fallback is selected after probing every richer format once
    assert_eq!(selected, Some("video/webm"));
    assert_eq!(probe_count, MIME_PREFERENCES.len());
}

/// WHAT: No supported format yields no selection
/// WHY: The controller turns this into UnsupportedFormat
#[test]
fn given_nothing_supported_when_negotiating_then_none() {
    // Given: A host that supports nothing
    // When: Negotiating
    let selected = negotiate_format(&MIME_PREFERENCES, |_| false);

    // Then: Nothing is selected
    assert!(selected.is_none());
}

/// WHAT: Owned preference lists negotiate the same as the built-in table
/// WHY: Preferences come from configuration as `Vec<String>`
#[test]
fn given_owned_preferences_when_negotiating_then_borrowed_entry_returned() {
    // Given: Preferences loaded as owned strings
    let preferences = vec!["video/mp4".to_string(), "video/webm".to_string()];

    // When: Negotiating against a WebM-only host
    let selected = negotiate_format(&preferences, |mime| mime.starts_with("video/webm"));

    // Then: The WebM entry is returned
    assert_eq!(selected, Some("video/webm"));
}
