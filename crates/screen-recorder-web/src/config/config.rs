//! Configuration management for the screen recorder.
//!
//! The defaults ship as `recorder.toml`, embedded at build time. A page may
//! override any subset of it with inline TOML; missing keys keep their
//! defaults.

use crate::{
    AppError, AppResult,
    config::{CaptureConfig, EncoderConfig, OutputConfig, UiConfig},
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use screen_recorder_core::{
    AudioConstraints, CaptureConstraints, RecorderSettings, VideoConstraints,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Characters no filename part may contain on any common filesystem.
const RESERVED_FILENAME_CHARS: &str = "/\\:*?\"<>|";

/// Embedded default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../../recorder.toml");

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Display and audio capture.
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Format and rates.
    #[serde(default)]
    pub encoder: EncoderConfig,
    /// Download naming.
    #[serde(default)]
    pub output: OutputConfig,
    /// Page element ids.
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load the embedded default configuration.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config = Self::from_toml_str(DEFAULT_CONFIG)?;
        info!("Default configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    #[track_caller]
    #[instrument(skip(contents))]
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Reject values the host would refuse or that produce broken files.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let problem = if self.capture.width == 0 || self.capture.height == 0 {
            Some("capture width and height must be non-zero".to_string())
        } else if self.capture.frame_rate == 0 {
            Some("capture frame_rate must be non-zero".to_string())
        } else if self.encoder.mime_types.iter().all(|m| m.trim().is_empty()) {
            Some("encoder mime_types must name at least one format".to_string())
        } else if self.encoder.video_bitrate == 0 {
            Some("encoder video_bitrate must be non-zero".to_string())
        } else if self.encoder.audio_bitrate == 0 {
            Some("encoder audio_bitrate must be non-zero".to_string())
        } else if self.encoder.timeslice_ms == 0 {
            Some("encoder timeslice_ms must be non-zero".to_string())
        } else if self.output.filename_prefix.is_empty() || self.output.file_extension.is_empty()
        {
            Some("output filename_prefix and file_extension must be set".to_string())
        } else if self
            .output
            .filename_prefix
            .chars()
            .chain(self.output.file_extension.chars())
            .any(is_reserved_filename_char)
        {
            Some(format!(
                "output filename_prefix and file_extension must not contain any of {}",
                RESERVED_FILENAME_CHARS
            ))
        } else if self.output.filename_prefix.contains('.') {
            Some("output filename_prefix must not contain '.'".to_string())
        } else {
            None
        };

        match problem {
            Some(reason) => Err(AppError::ConfigError {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// Settings for the capture controller.
    pub fn recorder_settings(&self) -> RecorderSettings {
        let audio = self.capture.capture_audio.then_some(AudioConstraints {
            echo_cancellation: self.capture.echo_cancellation,
            noise_suppression: self.capture.noise_suppression,
            auto_gain_control: self.capture.auto_gain_control,
        });

        RecorderSettings {
            constraints: CaptureConstraints {
                video: VideoConstraints {
                    width: self.capture.width,
                    height: self.capture.height,
                    ideal_frame_rate: self.capture.frame_rate,
                },
                audio,
            },
            microphone_label_hint: self.capture.microphone_label_hint.clone(),
            mime_preferences: self
                .encoder
                .mime_types
                .iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            video_bitrate: self.encoder.video_bitrate,
            audio_bitrate: self.encoder.audio_bitrate,
            timeslice: Duration::from_millis(u64::from(self.encoder.timeslice_ms)),
            filename_prefix: self.output.filename_prefix.clone(),
            file_extension: self.output.file_extension.clone(),
        }
    }
}

fn is_reserved_filename_char(c: char) -> bool {
    c.is_control() || RESERVED_FILENAME_CHARS.contains(c)
}
