use crate::config::{
    default_audio_bitrate, default_mime_types, default_timeslice_ms, default_video_bitrate,
};

use serde::{Deserialize, Serialize};

/// Encoder format and rate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// MIME types to probe, best first.
    #[serde(default = "default_mime_types")]
    pub mime_types: Vec<String>,

    /// Target video bitrate in bits per second.
    #[serde(default = "default_video_bitrate")]
    pub video_bitrate: u32,

    /// Target audio bitrate in bits per second.
    #[serde(default = "default_audio_bitrate")]
    pub audio_bitrate: u32,

    /// Chunk emission interval in milliseconds.
    #[serde(default = "default_timeslice_ms")]
    pub timeslice_ms: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            mime_types: default_mime_types(),
            video_bitrate: default_video_bitrate(),
            audio_bitrate: default_audio_bitrate(),
            timeslice_ms: default_timeslice_ms(),
        }
    }
}
