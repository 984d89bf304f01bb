use crate::{
    AppError, AppResult, UiConfig,
    browser::{BrowserEvent, forward},
};

use std::panic::Location;

use error_location::ErrorLocation;
use screen_recorder_core::StatusSurface;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement};

/// The page's Start/Stop buttons, status line and recording indicator.
pub(crate) struct DomControls {
    start_button: HtmlButtonElement,
    stop_button: HtmlButtonElement,
    status: HtmlElement,
    indicator: HtmlElement,
}

impl DomControls {
    /// Look up every control by the configured ids.
    #[track_caller]
    pub(crate) fn bind(document: &Document, ui: &UiConfig) -> AppResult<Self> {
        let controls = Self {
            start_button: element(document, &ui.start_button_id)?,
            stop_button: element(document, &ui.stop_button_id)?,
            status: element(document, &ui.status_id)?,
            indicator: element(document, &ui.indicator_id)?,
        };

        debug!(
            start = %ui.start_button_id,
            stop = %ui.stop_button_id,
            "Page controls bound"
        );

        Ok(controls)
    }

    /// Forward button clicks into the event loop for the page's lifetime.
    pub(crate) fn wire_triggers(&self, events: &UnboundedSender<BrowserEvent>) -> AppResult<()> {
        on_click(&self.start_button, events.clone(), || BrowserEvent::StartClicked)?;
        on_click(&self.stop_button, events.clone(), || BrowserEvent::StopClicked)?;
        Ok(())
    }
}

impl StatusSurface for DomControls {
    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_button.set_disabled(!enabled);
    }

    fn set_stop_enabled(&mut self, enabled: bool) {
        self.stop_button.set_disabled(!enabled);
    }

    fn show_status(&mut self, message: &str) {
        self.status.set_text_content(Some(message));
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.indicator.style().set_property("display", display) {
            warn!(error = ?e, "Failed to toggle recording indicator");
        }
    }
}

#[track_caller]
fn element<T: JsCast>(document: &Document, id: &str) -> AppResult<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| AppError::MissingElement {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn on_click<F>(
    button: &HtmlButtonElement,
    events: UnboundedSender<BrowserEvent>,
    make_event: F,
) -> AppResult<()>
where
    F: Fn() -> BrowserEvent + 'static,
{
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        forward(&events, make_event());
    });

    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;

    // Buttons live as long as the page; the listener must too.
    handler.forget();

    Ok(())
}
