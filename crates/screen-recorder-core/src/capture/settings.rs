use crate::{CaptureConstraints, MICROPHONE_LABEL_HINT, MIME_PREFERENCES};

use std::time::Duration;

/// Target video bitrate (25 Mbps).
pub const DEFAULT_VIDEO_BITRATE: u32 = 25_000_000;
/// Target audio bitrate (128 kbps).
pub const DEFAULT_AUDIO_BITRATE: u32 = 128_000;
/// How often the encoder hands over a chunk.
pub const DEFAULT_TIMESLICE: Duration = Duration::from_millis(100);
/// Prefix of every artifact filename.
pub const DEFAULT_FILENAME_PREFIX: &str = "recording";
/// Extension of every artifact filename. The container is always WebM.
pub const DEFAULT_FILE_EXTENSION: &str = "webm";

/// Everything the controller needs to know to run a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderSettings {
    /// Constraints for stream acquisition.
    pub constraints: CaptureConstraints,
    /// Audio track label fragment treated as a microphone.
    pub microphone_label_hint: String,
    /// Encoding formats in preference order.
    pub mime_preferences: Vec<String>,
    /// Target video bitrate in bits per second.
    pub video_bitrate: u32,
    /// Target audio bitrate in bits per second, applied when audio is muxed.
    pub audio_bitrate: u32,
    /// Chunk emission interval.
    pub timeslice: Duration,
    /// Artifact filename prefix.
    pub filename_prefix: String,
    /// Artifact filename extension, without the dot.
    pub file_extension: String,
}

/// Encoder configuration derived from the negotiated format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Negotiated MIME type.
    pub mime_type: String,
    /// Target video bitrate in bits per second.
    pub video_bitrate: u32,
    /// Target audio bitrate, present only when the stream carries audio.
    pub audio_bitrate: Option<u32>,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            constraints: CaptureConstraints::default(),
            microphone_label_hint: MICROPHONE_LABEL_HINT.to_string(),
            mime_preferences: MIME_PREFERENCES.iter().map(|m| m.to_string()).collect(),
            video_bitrate: DEFAULT_VIDEO_BITRATE,
            audio_bitrate: DEFAULT_AUDIO_BITRATE,
            timeslice: DEFAULT_TIMESLICE,
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }
}

impl RecorderSettings {
    /// Encoder options for `mime_type`; the audio bitrate is set only when
    /// `has_audio` is true.
    pub fn encoder_options(&self, mime_type: &str, has_audio: bool) -> EncoderOptions {
        EncoderOptions {
            mime_type: mime_type.to_string(),
            video_bitrate: self.video_bitrate,
            audio_bitrate: has_audio.then_some(self.audio_bitrate),
        }
    }
}
