use crate::{CaptureStream, EncoderOptions, MediaEncoder, MediaTrack};

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// One recording attempt: the acquired stream, its encoder and the format
/// they were configured with.
///
/// The session owns the stream and encoder exclusively; both are released
/// when the session is finished.
#[derive(Debug)]
pub struct CaptureSession<S, E> {
    pub(crate) id: Uuid,
    pub(crate) stream: S,
    pub(crate) encoder: E,
    pub(crate) options: EncoderOptions,
    pub(crate) started_at: DateTime<Utc>,
}

impl<S: CaptureStream, E: MediaEncoder> CaptureSession<S, E> {
    /// Session id used for event routing and log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Negotiated MIME type.
    pub fn mime_type(&self) -> &str {
        &self.options.mime_type
    }

    /// Encoder configuration in effect.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Wall-clock start of the session.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Stops every track of the stream.
    pub(crate) fn release(&self) {
        let track_count = stop_all_tracks(&self.stream);
        debug!(session_id = %self.id, track_count, "Capture tracks stopped");
    }
}

/// Stops every track of `stream`, returning how many were stopped.
pub(crate) fn stop_all_tracks<S: CaptureStream>(stream: &S) -> usize {
    let tracks = stream.tracks();
    for track in &tracks {
        track.stop();
    }
    tracks.len()
}
