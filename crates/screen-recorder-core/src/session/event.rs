use uuid::Uuid;

/// Everything that can drive the controller.
///
/// Host-originated events carry the id of the session they were wired for;
/// the controller ignores events for any other session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecorderEvent {
    /// The user pressed Start.
    StartRequested,
    /// The user pressed Stop.
    StopRequested,
    /// The encoder emitted a chunk. `None` models a host event without data.
    ChunkReady {
        /// Session the encoder belongs to.
        session_id: Uuid,
        /// Encoded bytes.
        data: Option<Vec<u8>>,
    },
    /// The captured video source ended outside our control.
    TrackEnded {
        /// Session the track belongs to.
        session_id: Uuid,
    },
    /// The encoder has fully stopped; no more chunks follow.
    Stopped {
        /// Session the encoder belongs to.
        session_id: Uuid,
    },
}
