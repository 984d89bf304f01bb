//! Collaborators the capture core drives but does not implement.
//!
//! A browser binding backs these with `getDisplayMedia`, `MediaRecorder` and
//! the DOM; tests back them with in-memory fakes.

use crate::{Artifact, CaptureConstraints, EncoderOptions, HostError};

use std::{fmt, future::Future, time::Duration};

use uuid::Uuid;

/// Entry point to the host's capture and encoding facilities.
pub trait CaptureHost {
    /// Live capture stream handed out by the host.
    type Stream: CaptureStream;
    /// Incremental encoder bound to one stream.
    type Encoder: MediaEncoder;

    /// Asks the host for a display stream. May suspend indefinitely while a
    /// permission prompt is open.
    fn acquire_stream(
        &self,
        constraints: &CaptureConstraints,
    ) -> impl Future<Output = Result<Self::Stream, HostError>>;

    /// Whether the host encoder can produce `mime_type`.
    fn is_format_supported(&self, mime_type: &str) -> bool;

    /// Builds an encoder over `stream`.
    ///
    /// The host must report every chunk and the final stop of this encoder
    /// tagged with `session_id`.
    fn create_encoder(
        &self,
        stream: &Self::Stream,
        options: &EncoderOptions,
        session_id: Uuid,
    ) -> Result<Self::Encoder, HostError>;
}

/// A live audio/video feed.
pub trait CaptureStream {
    /// Track handle type.
    type Track: MediaTrack;

    /// Audio tracks of the stream.
    fn audio_tracks(&self) -> Vec<Self::Track>;

    /// Video tracks of the stream.
    fn video_tracks(&self) -> Vec<Self::Track>;

    /// Every track of the stream, audio and video.
    fn tracks(&self) -> Vec<Self::Track>;

    /// Arranges for a track-ended notification tagged with `session_id` when
    /// the first video track ends outside our control.
    fn watch_video_end(&mut self, session_id: Uuid);
}

/// One audio or video track.
pub trait MediaTrack {
    /// Host-assigned label, e.g. the device or tab name.
    fn label(&self) -> String;

    /// Enables or mutes the track without removing it.
    fn set_enabled(&self, enabled: bool);

    /// Stops the track and releases the underlying capture source.
    fn stop(&self);
}

/// Host encoder producing chunks of encoded media.
pub trait MediaEncoder {
    /// Starts encoding, emitting a chunk every `timeslice`.
    fn start(&mut self, timeslice: Duration) -> Result<(), HostError>;

    /// Requests a stop. The host follows up with the final chunk and then a
    /// stopped notification.
    fn stop(&mut self) -> Result<(), HostError>;

    /// Current host-side state.
    fn state(&self) -> EncoderState;
}

/// Hands a finished artifact to the user.
pub trait ArtifactSink {
    /// Delivers the artifact, e.g. as a browser download.
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), HostError>;
}

/// The user-facing controls the core toggles.
pub trait StatusSurface {
    /// Enables or disables the Start trigger.
    fn set_start_enabled(&mut self, enabled: bool);

    /// Enables or disables the Stop trigger.
    fn set_stop_enabled(&mut self, enabled: bool);

    /// Replaces the single-line status text.
    fn show_status(&mut self, message: &str);

    /// Shows or hides the recording-in-progress indicator.
    fn set_indicator_visible(&mut self, visible: bool);
}

/// Host encoder state as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderState {
    /// Not encoding.
    Inactive,
    /// Encoding and emitting chunks.
    Recording,
    /// Paused by the host.
    Paused,
}

impl fmt::Display for EncoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncoderState::Inactive => "inactive",
            EncoderState::Recording => "recording",
            EncoderState::Paused => "paused",
        };
        f.write_str(name)
    }
}
