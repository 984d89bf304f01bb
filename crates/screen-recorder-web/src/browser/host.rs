use crate::browser::{BrowserEvent, forward, host_error, set_property};

use std::time::Duration;

use js_sys::{Array, Object};
use screen_recorder_core::{
    CaptureConstraints, CaptureHost, CaptureStream, EncoderOptions, EncoderState, HostError,
    MediaEncoder, MediaTrack,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    BlobEvent, DisplayMediaStreamConstraints, Event, MediaDevices, MediaRecorder,
    MediaRecorderOptions, MediaStream, MediaStreamTrack, RecordingState, Window,
};

/// `getDisplayMedia` plus `MediaRecorder`.
///
/// Every callback the browser fires is turned into a [`BrowserEvent`] on
/// `events`, tagged with the session it belongs to.
pub(crate) struct WebCaptureHost {
    media_devices: MediaDevices,
    events: UnboundedSender<BrowserEvent>,
}

impl WebCaptureHost {
    #[track_caller]
    pub(crate) fn new(
        window: &Window,
        events: UnboundedSender<BrowserEvent>,
    ) -> crate::AppResult<Self> {
        let media_devices = window.navigator().media_devices()?;
        Ok(Self {
            media_devices,
            events,
        })
    }
}

impl CaptureHost for WebCaptureHost {
    type Stream = WebStream;
    type Encoder = WebEncoder;

    #[instrument(skip(self, constraints))]
    async fn acquire_stream(
        &self,
        constraints: &CaptureConstraints,
    ) -> Result<WebStream, HostError> {
        let request = display_constraints(constraints).map_err(host_error)?;

        let promise = self
            .media_devices
            .get_display_media_with_constraints(&request)
            .map_err(host_error)?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(host_error)?
            .dyn_into::<MediaStream>()
            .map_err(|_| HostError::new("getDisplayMedia did not resolve to a MediaStream"))?;

        info!(stream_id = %stream.id(), "Display stream acquired");

        Ok(WebStream::new(stream, self.events.clone()))
    }

    fn is_format_supported(&self, mime_type: &str) -> bool {
        MediaRecorder::is_type_supported(mime_type)
    }

    fn create_encoder(
        &self,
        stream: &WebStream,
        options: &EncoderOptions,
        session_id: Uuid,
    ) -> Result<WebEncoder, HostError> {
        WebEncoder::new(stream, options, session_id, self.events.clone()).map_err(host_error)
    }
}

/// `{ video: { width, height, frameRate: { ideal } }, audio: {...} | false }`
fn display_constraints(
    constraints: &CaptureConstraints,
) -> Result<DisplayMediaStreamConstraints, JsValue> {
    let video = Object::new();
    set_property(&video, "width", &constraints.video.width.into())?;
    set_property(&video, "height", &constraints.video.height.into())?;
    let frame_rate = Object::new();
    set_property(&frame_rate, "ideal", &constraints.video.ideal_frame_rate.into())?;
    set_property(&video, "frameRate", &frame_rate)?;

    let audio: JsValue = match &constraints.audio {
        Some(audio) => {
            let options = Object::new();
            set_property(&options, "echoCancellation", &audio.echo_cancellation.into())?;
            set_property(&options, "noiseSuppression", &audio.noise_suppression.into())?;
            set_property(&options, "autoGainControl", &audio.auto_gain_control.into())?;
            options.into()
        }
        None => JsValue::FALSE,
    };

    let request = DisplayMediaStreamConstraints::new();
    set_property(&request, "video", &video)?;
    set_property(&request, "audio", &audio)?;

    Ok(request)
}

/// A `MediaStreamTrack` seen through the capture core.
#[derive(Debug, Clone)]
pub(crate) struct WebTrack {
    inner: MediaStreamTrack,
}

impl MediaTrack for WebTrack {
    fn label(&self) -> String {
        self.inner.label()
    }

    fn set_enabled(&self, enabled: bool) {
        self.inner.set_enabled(enabled);
    }

    fn stop(&self) {
        self.inner.stop();
    }
}

/// A captured `MediaStream` and the end-of-capture watch on its video.
pub(crate) struct WebStream {
    inner: MediaStream,
    events: UnboundedSender<BrowserEvent>,
    on_video_ended: Option<(MediaStreamTrack, Closure<dyn FnMut(Event)>)>,
}

impl WebStream {
    fn new(inner: MediaStream, events: UnboundedSender<BrowserEvent>) -> Self {
        Self {
            inner,
            events,
            on_video_ended: None,
        }
    }
}

fn collect_tracks(tracks: Array) -> Vec<WebTrack> {
    tracks
        .iter()
        .filter_map(|value| value.dyn_into::<MediaStreamTrack>().ok())
        .map(|inner| WebTrack { inner })
        .collect()
}

impl CaptureStream for WebStream {
    type Track = WebTrack;

    fn audio_tracks(&self) -> Vec<WebTrack> {
        collect_tracks(self.inner.get_audio_tracks())
    }

    fn video_tracks(&self) -> Vec<WebTrack> {
        collect_tracks(self.inner.get_video_tracks())
    }

    fn tracks(&self) -> Vec<WebTrack> {
        collect_tracks(self.inner.get_tracks())
    }

    fn watch_video_end(&mut self, session_id: Uuid) {
        let Some(track) = self.video_tracks().into_iter().next() else {
            warn!(session_id = %session_id, "Stream has no video track to watch");
            return;
        };

        let events = self.events.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            forward(&events, BrowserEvent::VideoEnded { session_id });
        });
        track.inner.set_onended(Some(handler.as_ref().unchecked_ref()));

        debug!(session_id = %session_id, label = %track.inner.label(), "Watching video track end");

        self.on_video_ended = Some((track.inner, handler));
    }
}

impl Drop for WebStream {
    fn drop(&mut self) {
        if let Some((track, _handler)) = self.on_video_ended.take() {
            track.set_onended(None);
        }
    }
}

/// A `MediaRecorder` whose chunks and stop are forwarded to the event loop.
pub(crate) struct WebEncoder {
    recorder: MediaRecorder,
    _on_data: Closure<dyn FnMut(BlobEvent)>,
    _on_stop: Closure<dyn FnMut(Event)>,
}

impl WebEncoder {
    fn new(
        stream: &WebStream,
        options: &EncoderOptions,
        session_id: Uuid,
        events: UnboundedSender<BrowserEvent>,
    ) -> Result<Self, JsValue> {
        let recorder_options = MediaRecorderOptions::new();
        set_property(&recorder_options, "mimeType", &JsValue::from_str(&options.mime_type))?;
        set_property(
            &recorder_options,
            "videoBitsPerSecond",
            &options.video_bitrate.into(),
        )?;
        if let Some(audio_bitrate) = options.audio_bitrate {
            set_property(&recorder_options, "audioBitsPerSecond", &audio_bitrate.into())?;
        }

        let recorder = MediaRecorder::new_with_media_stream_and_media_recorder_options(
            &stream.inner,
            &recorder_options,
        )?;

        let data_events = events.clone();
        let on_data = Closure::<dyn FnMut(BlobEvent)>::new(move |event: BlobEvent| {
            forward(
                &data_events,
                BrowserEvent::DataAvailable {
                    session_id,
                    blob: event.data(),
                },
            );
        });
        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));

        let on_stop = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            forward(&events, BrowserEvent::RecorderStopped { session_id });
        });
        recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));

        Ok(Self {
            recorder,
            _on_data: on_data,
            _on_stop: on_stop,
        })
    }
}

impl MediaEncoder for WebEncoder {
    fn start(&mut self, timeslice: Duration) -> Result<(), HostError> {
        let timeslice_ms = i32::try_from(timeslice.as_millis()).unwrap_or(i32::MAX);
        self.recorder
            .start_with_time_slice(timeslice_ms)
            .map_err(host_error)
    }

    fn stop(&mut self) -> Result<(), HostError> {
        self.recorder.stop().map_err(host_error)
    }

    fn state(&self) -> EncoderState {
        match self.recorder.state() {
            RecordingState::Recording => EncoderState::Recording,
            RecordingState::Paused => EncoderState::Paused,
            _ => EncoderState::Inactive,
        }
    }
}

impl Drop for WebEncoder {
    fn drop(&mut self) {
        // The closures die with us; the recorder must not call into them.
        self.recorder.set_ondataavailable(None);
        self.recorder.set_onstop(None);
    }
}
