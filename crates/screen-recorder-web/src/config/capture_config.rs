use crate::config::{
    default_frame_rate, default_height, default_microphone_label_hint, default_true,
    default_width,
};

use serde::{Deserialize, Serialize};

/// Display and audio capture configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Target width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Target height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Ideal frame rate.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// Request system audio alongside the display.
    #[serde(default = "default_true")]
    pub capture_audio: bool,

    /// Host echo cancellation.
    #[serde(default)]
    pub echo_cancellation: bool,

    /// Host noise suppression.
    #[serde(default)]
    pub noise_suppression: bool,

    /// Host automatic gain control.
    #[serde(default)]
    pub auto_gain_control: bool,

    /// Audio track label fragment treated as a microphone and muted.
    #[serde(default = "default_microphone_label_hint")]
    pub microphone_label_hint: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            frame_rate: default_frame_rate(),
            capture_audio: true,
            echo_cancellation: false,
            noise_suppression: false,
            auto_gain_control: false,
            microphone_label_hint: default_microphone_label_hint(),
        }
    }
}
