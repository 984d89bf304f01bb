use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;
use uuid::Uuid;
use web_sys::Blob;

/// Raw notifications from the page and from host callbacks.
///
/// Chunks still hold the browser `Blob`; the event loop reads it before the
/// controller sees it.
#[derive(Debug)]
pub(crate) enum BrowserEvent {
    /// Start button clicked.
    StartClicked,
    /// Stop button clicked.
    StopClicked,
    /// `MediaRecorder.ondataavailable`.
    DataAvailable {
        /// Session the recorder was created for.
        session_id: Uuid,
        /// `BlobEvent.data`.
        blob: Option<Blob>,
    },
    /// `MediaStreamTrack.onended` on the captured video.
    VideoEnded {
        /// Session the track belongs to.
        session_id: Uuid,
    },
    /// `MediaRecorder.onstop`.
    RecorderStopped {
        /// Session the recorder was created for.
        session_id: Uuid,
    },
}

/// Queues an event for the loop; only fails once the loop is gone.
pub(crate) fn forward(events: &UnboundedSender<BrowserEvent>, event: BrowserEvent) {
    if let Err(e) = events.send(event) {
        warn!(event = ?e.0, "Event loop closed, dropping browser event");
    }
}
