//! Screen-recorder Core Library
//!
//! Host-agnostic capture lifecycle: stream acquisition, format negotiation,
//! incremental chunk buffering and artifact finalization. The host's
//! capture, encoding and download facilities are reached through the traits
//! in [`host`](crate::CaptureHost), so the same state machine runs in a
//! browser binding and against in-memory fakes.
//!
//! # Example
//!
//! ```
//! use screen_recorder_core::{ChunkBuffer, finalize};
//!
//! let mut buffer = ChunkBuffer::new();
//! buffer.push(Some(b"webm-header".to_vec()));
//! buffer.push(None);
//! buffer.push(Some(b"cluster".to_vec()));
//!
//! let artifact = finalize(buffer.take(), "video/webm", "recording.webm".to_string()).unwrap();
//! assert_eq!(artifact.data(), b"webm-headercluster");
//! ```

mod artifact;
mod capture;
mod error;
mod host;
mod session;

pub use {
    artifact::{Artifact, ChunkBuffer, artifact_filename, finalize},
    capture::{
        AudioConstraints, CaptureConstraints, DEFAULT_AUDIO_BITRATE, DEFAULT_FILE_EXTENSION,
        DEFAULT_FILENAME_PREFIX, DEFAULT_FRAME_RATE, DEFAULT_HEIGHT, DEFAULT_TIMESLICE,
        DEFAULT_VIDEO_BITRATE, DEFAULT_WIDTH, EncoderOptions, MICROPHONE_LABEL_HINT,
        MIME_PREFERENCES, RecorderSettings, VideoConstraints, disable_microphone_tracks,
        is_microphone_label, negotiate_format,
    },
    error::{HostError, RecorderError, Result as CoreResult},
    host::{
        ArtifactSink, CaptureHost, CaptureStream, EncoderState, MediaEncoder, MediaTrack,
        StatusSurface,
    },
    session::{CaptureController, CaptureSession, RecorderEvent, SessionState, StatusMessage},
};
