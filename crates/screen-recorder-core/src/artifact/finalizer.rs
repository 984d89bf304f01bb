use crate::{Artifact, CoreResult, RecorderError};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Concatenates `chunks` in order into an artifact tagged with `media_type`.
///
/// # Errors
///
/// Returns [`RecorderError::EmptyRecording`] when there are no chunks or
/// when they add up to zero bytes.
#[track_caller]
#[instrument(skip(chunks), fields(chunk_count = chunks.len()))]
pub fn finalize(
    chunks: Vec<Vec<u8>>,
    media_type: &str,
    filename: String,
) -> CoreResult<Artifact> {
    let chunk_count = chunks.len();
    if chunk_count == 0 {
        return Err(RecorderError::EmptyRecording {
            chunk_count,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let data = chunks.concat();
    if data.is_empty() {
        return Err(RecorderError::EmptyRecording {
            chunk_count,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    debug!(size = data.len(), filename = %filename, "Artifact assembled");

    Ok(Artifact {
        data,
        filename,
        media_type: media_type.to_string(),
    })
}

/// Builds `<prefix>-<timestamp>.<extension>` from `now`.
///
/// The timestamp is ISO-8601 with millisecond precision in UTC, with `:` and
/// `.` replaced by `-` so it sorts lexically and is safe on every
/// filesystem, e.g. `recording-2024-03-05T14-07-09-042Z.webm`.
pub fn artifact_filename(prefix: &str, extension: &str, now: DateTime<Utc>) -> String {
    let timestamp = now
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace(|c: char| c == ':' || c == '.', "-");
    format!("{prefix}-{timestamp}.{extension}")
}
