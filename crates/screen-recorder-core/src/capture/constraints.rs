/// Target capture width in pixels.
pub const DEFAULT_WIDTH: u32 = 1920;
/// Target capture height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Ideal frame rate requested from the host.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Constraints passed to the host when requesting a display stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConstraints {
    /// Video track constraints.
    pub video: VideoConstraints,
    /// Audio track constraints. `None` requests a video-only stream.
    pub audio: Option<AudioConstraints>,
}

/// Resolution and frame rate targets for the captured display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoConstraints {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Ideal (not exact) frame rate.
    pub ideal_frame_rate: u32,
}

/// Host-side audio processing switches.
///
/// All three default to off: system audio is recorded as the host plays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioConstraints {
    /// Echo cancellation.
    pub echo_cancellation: bool,
    /// Noise suppression.
    pub noise_suppression: bool,
    /// Automatic gain control.
    pub auto_gain_control: bool,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ideal_frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            video: VideoConstraints::default(),
            audio: Some(AudioConstraints::default()),
        }
    }
}
