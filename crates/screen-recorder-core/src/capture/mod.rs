mod constraints;
mod format;
mod settings;
mod tracks;

pub use {
    constraints::{
        AudioConstraints, CaptureConstraints, DEFAULT_FRAME_RATE, DEFAULT_HEIGHT, DEFAULT_WIDTH,
        VideoConstraints,
    },
    format::{MIME_PREFERENCES, negotiate_format},
    settings::{
        DEFAULT_AUDIO_BITRATE, DEFAULT_FILE_EXTENSION, DEFAULT_FILENAME_PREFIX, DEFAULT_TIMESLICE,
        DEFAULT_VIDEO_BITRATE, EncoderOptions, RecorderSettings,
    },
    tracks::{MICROPHONE_LABEL_HINT, disable_microphone_tracks, is_microphone_label},
};
