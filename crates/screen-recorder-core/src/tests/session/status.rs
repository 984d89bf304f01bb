use crate::{RecorderError, StatusMessage};

use std::panic::Location;

use error_location::ErrorLocation;

/// WHAT: Success line shows size in MB with two decimals
/// WHY: Users read this to confirm the download size
#[test]
fn given_saved_message_when_displayed_then_two_decimal_megabytes() {
    // Given/When/Then
    assert_eq!(
        StatusMessage::Saved { size_mb: 1.5 }.to_string(),
        "Recording saved! (1.50 MB)"
    );
    assert_eq!(
        StatusMessage::Saved {
            size_mb: 17.0 / (1024.0 * 1024.0)
        }
        .to_string(),
        "Recording saved! (0.00 MB)"
    );
}

/// WHAT: Empty-recording errors map to the right user message
/// WHY: "No data" and "empty file" are different user situations
#[test]
fn given_finalize_errors_when_mapping_then_matching_status_lines() {
    // Given: The three finalize failure kinds
    let no_chunks = RecorderError::EmptyRecording {
        chunk_count: 0,
        location: ErrorLocation::from(Location::caller()),
    };
    let zero_size = RecorderError::EmptyRecording {
        chunk_count: 3,
        location: ErrorLocation::from(Location::caller()),
    };
    let delivery = RecorderError::DeliveryFailure {
        reason: "blocked by browser".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When/Then: Each maps to its own line
    assert_eq!(
        StatusMessage::for_finalize_error(&no_chunks).to_string(),
        "Error: No data recorded"
    );
    assert_eq!(
        StatusMessage::for_finalize_error(&zero_size).to_string(),
        "Error: Recording is empty"
    );
    assert_eq!(
        StatusMessage::for_finalize_error(&delivery).to_string(),
        "Error saving recording: blocked by browser"
    );
}
