use crate::{MICROPHONE_LABEL_HINT, MediaTrack, disable_microphone_tracks, is_microphone_label};

use std::cell::Cell;

struct LabelledTrack {
    label: &'static str,
    enabled: Cell<bool>,
}

impl LabelledTrack {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            enabled: Cell::new(true),
        }
    }
}

impl MediaTrack for LabelledTrack {
    fn label(&self) -> String {
        self.label.to_string()
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    fn stop(&self) {}
}

/// WHAT: Microphone-labelled audio is muted, system audio is kept
/// WHY: Only system audio belongs in a screen recording
#[test]
fn given_mixed_audio_tracks_when_filtering_then_only_microphone_disabled() {
    // Given: One system audio track and one microphone track
    let tracks = [
        LabelledTrack::new("System Audio"),
        LabelledTrack::new("Default - Microphone Array (Realtek)"),
    ];

    // When: Filtering with the default hint
    let disabled = disable_microphone_tracks(&tracks, MICROPHONE_LABEL_HINT);

    // Then: Only the microphone is disabled
    assert_eq!(disabled, 1);
    assert!(tracks[0].enabled.get());
    assert!(!tracks[1].enabled.get());
}

/// WHAT: Label matching ignores case
/// WHY: Hosts capitalise device names inconsistently
#[test]
fn given_uppercase_label_when_matching_then_detected() {
    // Given/When/Then: Case does not matter on either side
    assert!(is_microphone_label("USB MICROPHONE", "microphone"));
    assert!(is_microphone_label("usb microphone", "Microphone"));
    assert!(!is_microphone_label("Tab audio", "microphone"));
}

/// WHAT: An empty hint matches nothing
/// WHY: An empty config value must not mute every audio track
#[test]
fn given_empty_hint_when_matching_then_never_detected() {
    // Given/When/Then: Empty hint disables the filter
    assert!(!is_microphone_label("Microphone", ""));
}
