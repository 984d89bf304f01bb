//! Screen-recorder: browser screen capture with a Rust state machine.
//!
//! On `wasm32` this crate binds [`screen_recorder_core`] to
//! `getDisplayMedia`, `MediaRecorder` and the DOM, and starts itself when the
//! module loads. Configuration and errors compile on every target.

mod config;
mod error;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use {
    config::{
        CONFIG_ELEMENT_ID, CaptureConfig, Config, DEFAULT_CONFIG, EncoderConfig, OutputConfig,
        UiConfig,
    },
    error::{AppError, Result as AppResult},
};

#[cfg(target_arch = "wasm32")]
pub use browser::start;
