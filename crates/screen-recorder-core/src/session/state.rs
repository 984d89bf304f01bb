use std::fmt;

/// Controller lifecycle: `Idle → Acquiring → Recording → Stopping → Idle`.
///
/// `Acquiring` falls back to `Idle` on failure. `Stopping` always returns to
/// `Idle`, whether or not an artifact was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Ready to start.
    #[default]
    Idle,
    /// Waiting for the host to hand over a stream.
    Acquiring,
    /// Encoder running, chunks arriving.
    Recording,
    /// Stop requested, waiting for the encoder to finish.
    Stopping,
}

impl SessionState {
    /// Whether a session occupies the controller.
    pub fn is_active(self) -> bool {
        self != SessionState::Idle
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Acquiring => "acquiring",
            SessionState::Recording => "recording",
            SessionState::Stopping => "stopping",
        };
        f.write_str(name)
    }
}
