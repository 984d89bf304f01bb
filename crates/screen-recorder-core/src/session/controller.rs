use crate::{
    Artifact, ArtifactSink, CaptureConstraints, CaptureHost, CaptureSession, CaptureStream,
    ChunkBuffer, EncoderState, HostError, MediaEncoder, RecorderEvent, RecorderSettings,
    SessionState, StatusMessage, StatusSurface, artifact_filename, disable_microphone_tracks,
    finalize, negotiate_format,
    {CoreResult, RecorderError},
};

use super::session::stop_all_tracks;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Drives one capture session at a time from Start to a finished artifact.
///
/// All input arrives through [`handle`](Self::handle) (or the operation it
/// dispatches to), so the controller is the only owner of the session, its
/// stream, its encoder and the chunk buffer. It is not thread-safe and does
/// not need to be: every host notification is delivered on one event loop.
pub struct CaptureController<H: CaptureHost, A, U> {
    host: H,
    sink: A,
    ui: U,
    settings: RecorderSettings,
    state: SessionState,
    session: Option<CaptureSession<H::Stream, H::Encoder>>,
    chunks: ChunkBuffer,
}

impl<H, A, U> CaptureController<H, A, U>
where
    H: CaptureHost,
    A: ArtifactSink,
    U: StatusSurface,
{
    /// Creates an idle controller and puts the controls in their idle state.
    pub fn new(host: H, sink: A, mut ui: U, settings: RecorderSettings) -> Self {
        ui.set_start_enabled(true);
        ui.set_stop_enabled(false);
        ui.set_indicator_visible(false);

        Self {
            host,
            sink,
            ui,
            settings,
            state: SessionState::Idle,
            session: None,
            chunks: ChunkBuffer::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The running session, if any.
    pub fn session(&self) -> Option<&CaptureSession<H::Stream, H::Encoder>> {
        self.session.as_ref()
    }

    /// Number of chunks buffered for the running session.
    pub fn buffered_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Settings the controller was built with.
    pub fn settings(&self) -> &RecorderSettings {
        &self.settings
    }

    /// The host collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Feeds one event through the state machine.
    ///
    /// # Errors
    ///
    /// Returns whatever the dispatched operation returns. Every error has
    /// already been logged and shown on the status surface by then.
    pub async fn handle(&mut self, event: RecorderEvent) -> CoreResult<()> {
        match event {
            RecorderEvent::StartRequested => self.start().await,
            RecorderEvent::StopRequested => self.stop(),
            RecorderEvent::ChunkReady { session_id, data } => {
                self.on_data_available(session_id, data);
                Ok(())
            }
            RecorderEvent::TrackEnded { session_id } => self.on_track_ended(session_id),
            RecorderEvent::Stopped { session_id } => self.on_stopped(session_id),
        }
    }

    /// Acquires a stream, negotiates a format and starts encoding.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::SessionActive`] if a session is in flight,
    /// otherwise any acquisition, negotiation or encoder failure. On failure
    /// the controller is idle again and the Start trigger is re-enabled.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> CoreResult<()> {
        let constraints = self.begin_start()?;
        let acquired = self.host.acquire_stream(&constraints).await;
        self.complete_start(acquired)
    }

    /// `Idle → Acquiring`. Locks the Start trigger and returns the
    /// constraints to acquire with.
    #[track_caller]
    pub(crate) fn begin_start(&mut self) -> CoreResult<CaptureConstraints> {
        if self.state.is_active() {
            warn!(state = %self.state, "Start rejected, a session is already active");
            return Err(RecorderError::SessionActive {
                state: self.state,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.state = SessionState::Acquiring;
        self.ui.set_start_enabled(false);
        self.ui.set_stop_enabled(false);
        self.show(StatusMessage::AwaitingSelection);

        debug!("Requesting display capture");

        Ok(self.settings.constraints.clone())
    }

    /// `Acquiring → Recording`, or back to `Idle` on failure.
    #[track_caller]
    pub(crate) fn complete_start(
        &mut self,
        acquired: Result<H::Stream, HostError>,
    ) -> CoreResult<()> {
        let stream = match acquired {
            Ok(stream) => stream,
            Err(e) => {
                return Err(self.fail_start(RecorderError::AcquisitionFailure {
                    reason: e.message,
                    location: ErrorLocation::from(Location::caller()),
                }));
            }
        };

        if self.state != SessionState::Acquiring {
            warn!(state = %self.state, "Stream arrived outside acquisition, releasing it");
            stop_all_tracks(&stream);
            return Ok(());
        }

        let session = match self.configure_session(stream) {
            Ok(session) => session,
            Err(e) => return Err(self.fail_start(e)),
        };

        info!(
            session_id = %session.id,
            mime_type = %session.options.mime_type,
            video_bitrate = session.options.video_bitrate,
            audio_bitrate = ?session.options.audio_bitrate,
            timeslice_ms = self.settings.timeslice.as_millis(),
            "Recording started"
        );

        self.session = Some(session);
        self.state = SessionState::Recording;
        self.ui.set_start_enabled(false);
        self.ui.set_stop_enabled(true);
        self.ui.set_indicator_visible(true);
        self.show(StatusMessage::Recording);

        Ok(())
    }

    /// Filters audio, negotiates the format and starts the encoder. Any
    /// failure after acquisition releases the stream before returning.
    #[track_caller]
    fn configure_session(
        &mut self,
        mut stream: H::Stream,
    ) -> CoreResult<CaptureSession<H::Stream, H::Encoder>> {
        let audio_tracks = stream.audio_tracks();
        disable_microphone_tracks(&audio_tracks, &self.settings.microphone_label_hint);

        let host = &self.host;
        let mime_type = match negotiate_format(&self.settings.mime_preferences, |mime| {
            host.is_format_supported(mime)
        }) {
            Some(mime) => mime.to_string(),
            None => {
                stop_all_tracks(&stream);
                return Err(RecorderError::UnsupportedFormat {
                    tried: self.settings.mime_preferences.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let options = self
            .settings
            .encoder_options(&mime_type, !audio_tracks.is_empty());
        let session_id = Uuid::new_v4();

        let mut encoder = match self.host.create_encoder(&stream, &options, session_id) {
            Ok(encoder) => encoder,
            Err(e) => {
                stop_all_tracks(&stream);
                return Err(RecorderError::EncoderFailure {
                    reason: format!("Failed to create encoder: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        self.chunks.clear();

        if let Err(e) = encoder.start(self.settings.timeslice) {
            stop_all_tracks(&stream);
            return Err(RecorderError::EncoderFailure {
                reason: format!("Failed to start encoder: {}", e),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        stream.watch_video_end(session_id);

        Ok(CaptureSession {
            id: session_id,
            stream,
            encoder,
            options,
            started_at: Utc::now(),
        })
    }

    fn fail_start(&mut self, error: RecorderError) -> RecorderError {
        error!(error = ?error, "Failed to start recording");

        self.state = SessionState::Idle;
        self.session = None;
        self.reset_controls();
        self.show(StatusMessage::StartFailed);

        error
    }

    /// `Recording → Stopping`. A no-op when nothing is recording.
    ///
    /// # Errors
    ///
    /// Only fails if the encoder refuses to stop and the immediate finalize
    /// that follows fails.
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> CoreResult<()> {
        if self.state != SessionState::Recording {
            debug!(state = %self.state, "Stop ignored, not recording");
            return Ok(());
        }

        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        if session.encoder.state() == EncoderState::Inactive {
            debug!(session_id = %session.id, "Stop ignored, encoder already inactive");
            return Ok(());
        }

        let session_id = session.id;
        self.state = SessionState::Stopping;
        self.ui.set_stop_enabled(false);

        match session.encoder.stop() {
            Ok(()) => {
                self.show(StatusMessage::Finishing);
                info!(session_id = %session_id, "Stop requested");
                Ok(())
            }
            Err(e) => {
                // No stopped notification will follow; finalize what we have.
                error!(
                    session_id = %session_id,
                    error = ?e,
                    "Encoder refused to stop, finalizing buffered data"
                );
                self.finish()
            }
        }
    }

    /// Buffers a chunk for the current session.
    ///
    /// Returns whether the chunk was kept; chunks for other sessions and
    /// empty chunks are dropped.
    pub fn on_data_available(&mut self, session_id: Uuid, data: Option<Vec<u8>>) -> bool {
        if !self.is_current(session_id) {
            debug!(session_id = %session_id, "Chunk for stale session ignored");
            return false;
        }

        self.chunks.push(data)
    }

    /// The captured video ended outside our control: stop as if the user
    /// had pressed Stop.
    ///
    /// # Errors
    ///
    /// Same as [`stop`](Self::stop).
    #[instrument(skip(self))]
    pub fn on_track_ended(&mut self, session_id: Uuid) -> CoreResult<()> {
        if !self.is_current(session_id) {
            debug!(session_id = %session_id, "Track end for stale session ignored");
            return Ok(());
        }

        if self.state != SessionState::Recording {
            debug!(state = %self.state, "Track ended while not recording");
            return Ok(());
        }

        info!(session_id = %session_id, "Video track ended, stopping recording");
        self.stop()
    }

    /// The encoder has ceased: release the stream, finalize and reset.
    ///
    /// # Errors
    ///
    /// Returns the finalize or delivery error. The controller is idle
    /// afterwards either way.
    #[instrument(skip(self))]
    pub fn on_stopped(&mut self, session_id: Uuid) -> CoreResult<()> {
        if !self.is_current(session_id) {
            debug!(session_id = %session_id, "Stop for stale session ignored");
            return Ok(());
        }

        self.finish()
    }

    fn finish(&mut self) -> CoreResult<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };

        session.release();

        let chunks = self.chunks.take();
        let filename = artifact_filename(
            &self.settings.filename_prefix,
            &self.settings.file_extension,
            Utc::now(),
        );

        let outcome = finalize(chunks, session.mime_type(), filename)
            .and_then(|artifact| self.deliver(&artifact).map(|()| artifact.size_mb()));

        match &outcome {
            Ok(size_mb) => self.show(StatusMessage::Saved { size_mb: *size_mb }),
            Err(e) => {
                error!(session_id = %session.id, error = ?e, "Failed to finalize recording");
                self.show(StatusMessage::for_finalize_error(e));
            }
        }

        self.state = SessionState::Idle;
        self.reset_controls();

        info!(
            session_id = %session.id,
            duration_ms = (Utc::now() - session.started_at).num_milliseconds(),
            "Capture session finished"
        );

        outcome.map(|_| ())
    }

    #[track_caller]
    fn deliver(&mut self, artifact: &Artifact) -> CoreResult<()> {
        self.sink
            .deliver(artifact)
            .map_err(|e| RecorderError::DeliveryFailure {
                reason: e.message,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            filename = %artifact.filename(),
            size = artifact.size(),
            media_type = %artifact.media_type(),
            "Recording saved"
        );

        Ok(())
    }

    fn is_current(&self, session_id: Uuid) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.id == session_id)
    }

    fn reset_controls(&mut self) {
        self.ui.set_indicator_visible(false);
        self.ui.set_start_enabled(true);
        self.ui.set_stop_enabled(false);
    }

    fn show(&mut self, message: StatusMessage) {
        self.ui.show_status(&message.to_string());
    }
}
