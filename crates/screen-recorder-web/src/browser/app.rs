use crate::{
    AppResult,
    browser::{BrowserEvent, DomControls, DownloadSink, WebCaptureHost},
};

use js_sys::Uint8Array;
use screen_recorder_core::{CaptureController, RecorderEvent};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::Blob;

/// The page event loop.
///
/// Events are handled one at a time in arrival order, so chunks reach the
/// controller in the order the recorder produced them and the stop
/// notification only after the last of them.
pub(crate) struct App {
    pub(crate) controller: CaptureController<WebCaptureHost, DownloadSink, DomControls>,
    pub(crate) event_rx: UnboundedReceiver<BrowserEvent>,
}

impl App {
    pub(crate) async fn run(mut self) {
        while let Some(event) = self.event_rx.recv().await {
            let event = translate(event).await;
            if let Err(e) = self.dispatch(event).await {
                // Already logged and shown by the controller.
                debug!(error = %e, "Event handling failed");
            }
        }

        info!("Event loop finished");
    }

    async fn dispatch(&mut self, event: RecorderEvent) -> AppResult<()> {
        self.controller.handle(event).await?;
        Ok(())
    }
}

async fn translate(event: BrowserEvent) -> RecorderEvent {
    match event {
        BrowserEvent::StartClicked => RecorderEvent::StartRequested,
        BrowserEvent::StopClicked => RecorderEvent::StopRequested,
        BrowserEvent::DataAvailable { session_id, blob } => {
            let data = match blob {
                Some(blob) => read_blob(&blob).await,
                None => None,
            };
            RecorderEvent::ChunkReady { session_id, data }
        }
        BrowserEvent::VideoEnded { session_id } => RecorderEvent::TrackEnded { session_id },
        BrowserEvent::RecorderStopped { session_id } => RecorderEvent::Stopped { session_id },
    }
}

/// Bytes of `blob`, or `None` if the browser could not read it.
async fn read_blob(blob: &Blob) -> Option<Vec<u8>> {
    match JsFuture::from(blob.array_buffer()).await {
        Ok(buffer) => Some(Uint8Array::new(&buffer).to_vec()),
        Err(e) => {
            warn!(error = ?e, size = blob.size(), "Failed to read recorded chunk");
            None
        }
    }
}
