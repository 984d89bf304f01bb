use screen_recorder_core::RecorderError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the browser binding.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Capture lifecycle error from screen-recorder-core.
    #[error("Recorder error: {source} {location}")]
    Recorder {
        /// The underlying recorder error.
        #[source]
        source: RecorderError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// A browser API threw or returned something unexpected.
    #[error("Browser error: {reason} {location}")]
    Browser {
        /// Message extracted from the thrown value.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// A control the page must provide is missing or has the wrong type.
    #[error("Page element #{id} missing or invalid {location}")]
    MissingElement {
        /// Element id looked up.
        id: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration parsing or validation error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<RecorderError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<RecorderError> for AppError {
    #[track_caller]
    fn from(source: RecorderError) -> Self {
        AppError::Recorder {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
