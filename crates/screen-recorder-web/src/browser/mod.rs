//! `web-sys` implementations of the capture host traits and the page
//! event loop that feeds them into the controller.

mod app;
mod browser_event;
mod dom;
mod download;
mod host;
mod js;
mod logging;

pub(crate) use {
    app::App,
    browser_event::{BrowserEvent, forward},
    dom::DomControls,
    download::DownloadSink,
    host::WebCaptureHost,
    js::{host_error, set_property},
};

use crate::{AppError, AppResult, CONFIG_ELEMENT_ID, Config};

use std::panic::Location;

use error_location::ErrorLocation;
use screen_recorder_core::CaptureController;
use tokio::sync::mpsc;
use tracing::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Module entry point, run by the generated JS glue on load.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    launch().map_err(|e| {
        error!(error = ?e, "Failed to start screen recorder");
        JsValue::from(e)
    })
}

fn launch() -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser {
        reason: "No global window".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let document = window.document().ok_or_else(|| AppError::Browser {
        reason: "Window has no document".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let config = load_config(&document)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let controls = DomControls::bind(&document, &config.ui)?;
    controls.wire_triggers(&event_tx)?;

    let host = WebCaptureHost::new(&window, event_tx)?;
    let sink = DownloadSink::new(document);

    let app = App {
        controller: CaptureController::new(host, sink, controls, config.recorder_settings()),
        event_rx,
    };

    wasm_bindgen_futures::spawn_local(app.run());

    info!("Screen recorder ready");

    Ok(())
}

/// Inline page configuration if present, embedded defaults otherwise.
fn load_config(document: &Document) -> AppResult<Config> {
    let inline = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match inline {
        Some(contents) => {
            let config = Config::from_toml_str(&contents)?;
            info!(element_id = CONFIG_ELEMENT_ID, "Inline configuration loaded");
            Ok(config)
        }
        None => Config::load(),
    }
}
