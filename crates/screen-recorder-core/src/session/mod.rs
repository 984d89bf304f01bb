mod controller;
mod event;
#[allow(clippy::module_inception)]
mod session;
mod state;
mod status;

pub use {
    controller::CaptureController, event::RecorderEvent, session::CaptureSession,
    state::SessionState, status::StatusMessage,
};
