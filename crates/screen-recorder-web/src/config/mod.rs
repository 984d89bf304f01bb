mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod encoder_config;
mod output_config;
mod ui_config;

pub use {
    capture_config::CaptureConfig,
    config::{Config, DEFAULT_CONFIG},
    encoder_config::EncoderConfig,
    output_config::OutputConfig, ui_config::UiConfig,
};

use screen_recorder_core::{
    DEFAULT_AUDIO_BITRATE, DEFAULT_FILE_EXTENSION, DEFAULT_FILENAME_PREFIX, DEFAULT_FRAME_RATE,
    DEFAULT_HEIGHT, DEFAULT_TIMESLICE, DEFAULT_VIDEO_BITRATE, DEFAULT_WIDTH,
    MICROPHONE_LABEL_HINT, MIME_PREFERENCES,
};

/// Id of the optional inline `<script type="application/toml">` override.
pub const CONFIG_ELEMENT_ID: &str = "recorder-config";

pub(crate) fn default_width() -> u32 {
    DEFAULT_WIDTH
}

pub(crate) fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

pub(crate) fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_microphone_label_hint() -> String {
    MICROPHONE_LABEL_HINT.to_string()
}

pub(crate) fn default_mime_types() -> Vec<String> {
    MIME_PREFERENCES.iter().map(|m| m.to_string()).collect()
}

pub(crate) fn default_video_bitrate() -> u32 {
    DEFAULT_VIDEO_BITRATE
}

pub(crate) fn default_audio_bitrate() -> u32 {
    DEFAULT_AUDIO_BITRATE
}

pub(crate) fn default_timeslice_ms() -> u32 {
    DEFAULT_TIMESLICE.as_millis() as u32
}

pub(crate) fn default_filename_prefix() -> String {
    DEFAULT_FILENAME_PREFIX.to_string()
}

pub(crate) fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

pub(crate) fn default_start_button_id() -> String {
    "startBtn".to_string()
}

pub(crate) fn default_stop_button_id() -> String {
    "stopBtn".to_string()
}

pub(crate) fn default_status_id() -> String {
    "status".to_string()
}

pub(crate) fn default_indicator_id() -> String {
    "recordingIndicator".to_string()
}
