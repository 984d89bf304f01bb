use crate::MediaTrack;

use tracing::info;

/// Label fragment that marks an audio track as a microphone.
pub const MICROPHONE_LABEL_HINT: &str = "microphone";

/// Case-insensitive check of a track label against `hint`.
///
/// Track labels are chosen by the host and the OS, so this is a heuristic:
/// a microphone with an unusual label passes through, and a system source
/// whose label happens to contain the hint is muted.
pub fn is_microphone_label(label: &str, hint: &str) -> bool {
    !hint.is_empty() && label.to_lowercase().contains(&hint.to_lowercase())
}

/// Disables every audio track whose label looks like a microphone.
///
/// Returns how many tracks were disabled. Disabled tracks stay in the stream
/// and are still stopped on release.
pub fn disable_microphone_tracks<T: MediaTrack>(tracks: &[T], hint: &str) -> usize {
    let mut disabled = 0;
    for track in tracks {
        let label = track.label();
        if is_microphone_label(&label, hint) {
            track.set_enabled(false);
            disabled += 1;
            info!(label = %label, "Disabled microphone audio track");
        }
    }
    disabled
}
