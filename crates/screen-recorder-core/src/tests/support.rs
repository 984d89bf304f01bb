use crate::{
    Artifact, ArtifactSink, CaptureConstraints, CaptureController, CaptureHost, CaptureStream,
    EncoderOptions, EncoderState, HostError, MIME_PREFERENCES, MediaEncoder, MediaTrack,
    RecorderSettings, StatusSurface,
};

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use uuid::Uuid;

/// Everything the fake host observed.
#[derive(Debug, Default)]
pub(crate) struct HostLog {
    pub(crate) acquisitions: usize,
    pub(crate) constraints: Vec<CaptureConstraints>,
    pub(crate) probes: Vec<String>,
    pub(crate) encoder_options: Vec<EncoderOptions>,
    pub(crate) encoder_sessions: Vec<Uuid>,
    pub(crate) timeslices: Vec<Duration>,
    pub(crate) stop_calls: usize,
    pub(crate) watched: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeTrack {
    pub(crate) label: String,
    pub(crate) enabled: Rc<Cell<bool>>,
    pub(crate) stopped: Rc<Cell<bool>>,
}

impl FakeTrack {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            enabled: Rc::new(Cell::new(true)),
            stopped: Rc::new(Cell::new(false)),
        }
    }
}

impl MediaTrack for FakeTrack {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    fn stop(&self) {
        self.stopped.set(true);
    }
}

#[derive(Debug)]
pub(crate) struct FakeStream {
    audio: Vec<FakeTrack>,
    video: Vec<FakeTrack>,
    log: Rc<RefCell<HostLog>>,
}

impl CaptureStream for FakeStream {
    type Track = FakeTrack;

    fn audio_tracks(&self) -> Vec<FakeTrack> {
        self.audio.clone()
    }

    fn video_tracks(&self) -> Vec<FakeTrack> {
        self.video.clone()
    }

    fn tracks(&self) -> Vec<FakeTrack> {
        self.video.iter().chain(self.audio.iter()).cloned().collect()
    }

    fn watch_video_end(&mut self, session_id: Uuid) {
        self.log.borrow_mut().watched.push(session_id);
    }
}

#[derive(Debug)]
pub(crate) struct FakeEncoder {
    state: EncoderState,
    refuse_start: bool,
    refuse_stop: bool,
    log: Rc<RefCell<HostLog>>,
}

impl MediaEncoder for FakeEncoder {
    fn start(&mut self, timeslice: Duration) -> Result<(), HostError> {
        self.log.borrow_mut().timeslices.push(timeslice);
        if self.refuse_start {
            return Err(HostError::new("encoder rejected the stream"));
        }
        self.state = EncoderState::Recording;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), HostError> {
        self.log.borrow_mut().stop_calls += 1;
        if self.refuse_stop {
            return Err(HostError::new("encoder is wedged"));
        }
        self.state = EncoderState::Inactive;
        Ok(())
    }

    fn state(&self) -> EncoderState {
        self.state
    }
}

/// Scriptable capture host.
pub(crate) struct FakeHost {
    supported: Vec<String>,
    audio_labels: Vec<String>,
    acquire_error: Option<String>,
    refuse_create: bool,
    refuse_start: bool,
    refuse_stop: bool,
    pub(crate) log: Rc<RefCell<HostLog>>,
    pub(crate) tracks: Rc<RefCell<Vec<FakeTrack>>>,
}

impl FakeHost {
    /// Supports every preferred format and hands out one video track plus
    /// one system audio track.
    pub(crate) fn new() -> Self {
        Self {
            supported: MIME_PREFERENCES.iter().map(|m| m.to_string()).collect(),
            audio_labels: vec!["System Audio".to_string()],
            acquire_error: None,
            refuse_create: false,
            refuse_start: false,
            refuse_stop: false,
            log: Rc::new(RefCell::new(HostLog::default())),
            tracks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn supporting(mut self, mime_types: &[&str]) -> Self {
        self.supported = mime_types.iter().map(|m| m.to_string()).collect();
        self
    }

    pub(crate) fn with_audio_labels(mut self, labels: &[&str]) -> Self {
        self.audio_labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub(crate) fn denying_capture(mut self, message: &str) -> Self {
        self.acquire_error = Some(message.to_string());
        self
    }

    pub(crate) fn failing_encoder_creation(mut self) -> Self {
        self.refuse_create = true;
        self
    }

    pub(crate) fn failing_encoder_start(mut self) -> Self {
        self.refuse_start = true;
        self
    }

    pub(crate) fn refusing_stop(mut self) -> Self {
        self.refuse_stop = true;
        self
    }
}

impl CaptureHost for FakeHost {
    type Stream = FakeStream;
    type Encoder = FakeEncoder;

    async fn acquire_stream(
        &self,
        constraints: &CaptureConstraints,
    ) -> Result<FakeStream, HostError> {
        {
            let mut log = self.log.borrow_mut();
            log.acquisitions += 1;
            log.constraints.push(constraints.clone());
        }

        if let Some(message) = &self.acquire_error {
            return Err(HostError::new(message.clone()));
        }

        let video = vec![FakeTrack::new("screen:0")];
        let audio: Vec<FakeTrack> = self.audio_labels.iter().map(|l| FakeTrack::new(l)).collect();

        let mut tracks = self.tracks.borrow_mut();
        tracks.extend(video.iter().cloned());
        tracks.extend(audio.iter().cloned());

        Ok(FakeStream {
            audio,
            video,
            log: Rc::clone(&self.log),
        })
    }

    fn is_format_supported(&self, mime_type: &str) -> bool {
        self.log.borrow_mut().probes.push(mime_type.to_string());
        self.supported.iter().any(|m| m == mime_type)
    }

    fn create_encoder(
        &self,
        _stream: &FakeStream,
        options: &EncoderOptions,
        session_id: Uuid,
    ) -> Result<FakeEncoder, HostError> {
        {
            let mut log = self.log.borrow_mut();
            log.encoder_options.push(options.clone());
            log.encoder_sessions.push(session_id);
        }

        if self.refuse_create {
            return Err(HostError::new("unsupported encoder options"));
        }

        Ok(FakeEncoder {
            state: EncoderState::Inactive,
            refuse_start: self.refuse_start,
            refuse_stop: self.refuse_stop,
            log: Rc::clone(&self.log),
        })
    }
}

/// Collects delivered artifacts, or fails every delivery.
pub(crate) struct FakeSink {
    fail_with: Option<String>,
    pub(crate) delivered: Rc<RefCell<Vec<Artifact>>>,
}

impl FakeSink {
    pub(crate) fn new() -> Self {
        Self {
            fail_with: None,
            delivered: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new()
        }
    }
}

impl ArtifactSink for FakeSink {
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), HostError> {
        if let Some(message) = &self.fail_with {
            return Err(HostError::new(message.clone()));
        }
        self.delivered.borrow_mut().push(artifact.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) start_enabled: bool,
    pub(crate) stop_enabled: bool,
    pub(crate) indicator_visible: bool,
    pub(crate) statuses: Vec<String>,
}

impl UiState {
    pub(crate) fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }
}

pub(crate) struct FakeUi {
    pub(crate) state: Rc<RefCell<UiState>>,
}

impl StatusSurface for FakeUi {
    fn set_start_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().start_enabled = enabled;
    }

    fn set_stop_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().stop_enabled = enabled;
    }

    fn show_status(&mut self, message: &str) {
        self.state.borrow_mut().statuses.push(message.to_string());
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        self.state.borrow_mut().indicator_visible = visible;
    }
}

/// A controller wired to fakes, with handles to everything they record.
pub(crate) struct Harness {
    pub(crate) controller: CaptureController<FakeHost, FakeSink, FakeUi>,
    pub(crate) log: Rc<RefCell<HostLog>>,
    pub(crate) tracks: Rc<RefCell<Vec<FakeTrack>>>,
    pub(crate) delivered: Rc<RefCell<Vec<Artifact>>>,
    pub(crate) ui: Rc<RefCell<UiState>>,
}

impl Harness {
    pub(crate) fn new(host: FakeHost) -> Self {
        Self::with_sink(host, FakeSink::new())
    }

    pub(crate) fn with_sink(host: FakeHost, sink: FakeSink) -> Self {
        let log = Rc::clone(&host.log);
        let tracks = Rc::clone(&host.tracks);
        let delivered = Rc::clone(&sink.delivered);
        let ui = Rc::new(RefCell::new(UiState::default()));
        let fake_ui = FakeUi {
            state: Rc::clone(&ui),
        };

        Self {
            controller: CaptureController::new(host, sink, fake_ui, RecorderSettings::default()),
            log,
            tracks,
            delivered,
            ui,
        }
    }

    /// Id of the running session, or a fresh id that matches nothing.
    pub(crate) fn session_id(&self) -> Uuid {
        self.controller
            .session()
            .map(|session| session.id())
            .unwrap_or_else(Uuid::new_v4)
    }

    pub(crate) fn all_tracks_stopped(&self) -> bool {
        let tracks = self.tracks.borrow();
        !tracks.is_empty() && tracks.iter().all(|t| t.stopped.get())
    }
}

/// Whether `name` looks like `recording-YYYY-MM-DDTHH-MM-SS-mmmZ.webm`.
pub(crate) fn is_timestamped_filename(name: &str) -> bool {
    let Some(timestamp) = name
        .strip_prefix("recording-")
        .and_then(|rest| rest.strip_suffix(".webm"))
    else {
        return false;
    };

    let expected = "dddd-dd-ddTdd-dd-dd-dddZ";
    timestamp.len() == expected.len()
        && timestamp
            .chars()
            .zip(expected.chars())
            .all(|(c, e)| match e {
                'd' => c.is_ascii_digit(),
                other => c == other,
            })
}
