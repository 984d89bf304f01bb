use crate::RecorderError;

use std::fmt;

/// Single-line messages shown on the status surface.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    /// The host picker is open.
    AwaitingSelection,
    /// Encoder running.
    Recording,
    /// Stop requested, waiting for the last chunk.
    Finishing,
    /// Any failure before recording began.
    StartFailed,
    /// No chunk arrived during the session.
    NoDataRecorded,
    /// Chunks arrived but add up to nothing.
    RecordingEmpty,
    /// The download could not be triggered.
    SaveFailed(String),
    /// Download triggered; carries the artifact size in megabytes.
    Saved {
        /// Artifact size in megabytes.
        size_mb: f64,
    },
}

impl StatusMessage {
    /// Status line for an error raised while finalizing.
    pub fn for_finalize_error(error: &RecorderError) -> Self {
        match error {
            RecorderError::EmptyRecording { chunk_count: 0, .. } => StatusMessage::NoDataRecorded,
            RecorderError::EmptyRecording { .. } => StatusMessage::RecordingEmpty,
            RecorderError::DeliveryFailure { reason, .. } => {
                StatusMessage::SaveFailed(reason.clone())
            }
            other => StatusMessage::SaveFailed(other.to_string()),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::AwaitingSelection => f.write_str("Waiting for screen selection..."),
            StatusMessage::Recording => f.write_str("Recording..."),
            StatusMessage::Finishing => f.write_str("Finishing recording..."),
            StatusMessage::StartFailed => {
                f.write_str("Error starting recording. Please try again.")
            }
            StatusMessage::NoDataRecorded => f.write_str("Error: No data recorded"),
            StatusMessage::RecordingEmpty => f.write_str("Error: Recording is empty"),
            StatusMessage::SaveFailed(reason) => write!(f, "Error saving recording: {reason}"),
            StatusMessage::Saved { size_mb } => write!(f, "Recording saved! ({size_mb:.2} MB)"),
        }
    }
}
