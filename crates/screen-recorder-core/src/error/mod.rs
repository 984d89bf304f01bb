use crate::SessionState;

use error_location::ErrorLocation;
use thiserror::Error;

/// Capture lifecycle errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// The host refused or failed to provide a capture stream.
    #[error("Capture acquisition failed: {reason} {location}")]
    AcquisitionFailure {
        /// Message reported by the host.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// None of the preferred MIME types is supported by the host encoder.
    #[error("No supported recording format among {tried:?} {location}")]
    UnsupportedFormat {
        /// MIME types probed, in preference order.
        tried: Vec<String>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Finalize found no chunks, or chunks that add up to zero bytes.
    #[error("Recording is empty ({chunk_count} chunks) {location}")]
    EmptyRecording {
        /// Number of chunks present at finalize.
        chunk_count: usize,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The artifact could not be handed to the download surface.
    #[error("Artifact delivery failed: {reason} {location}")]
    DeliveryFailure {
        /// Message reported by the delivery surface.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The host encoder could not be created, started or stopped.
    #[error("Encoder error: {reason} {location}")]
    EncoderFailure {
        /// Message reported by the host encoder.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A start was requested while another session is still in flight.
    #[error("A capture session is already {state} {location}")]
    SessionActive {
        /// Controller state at the time of the request.
        state: SessionState,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Failure reported by a host collaborator.
///
/// Hosts only know how to describe what went wrong; the controller decides
/// which [`RecorderError`] it maps to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HostError {
    /// Human-readable message from the host environment.
    pub message: String,
}

impl HostError {
    /// Wraps a host message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
