use crate::AppError;

use std::panic::Location;

use error_location::ErrorLocation;
use js_sys::{Object, Reflect};
use screen_recorder_core::HostError;
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human-readable text for a thrown JS value.
///
/// `DOMException`s such as `NotAllowedError` are `Error` instances, so they
/// come out as `name: message`.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!(
            "{}: {}",
            String::from(error.name()),
            String::from(error.message())
        );
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn host_error(value: JsValue) -> HostError {
    HostError::new(js_message(&value))
}

/// `target[key] = value`.
pub(crate) fn set_property(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

impl From<JsValue> for AppError {
    #[track_caller]
    fn from(value: JsValue) -> Self {
        AppError::Browser {
            reason: js_message(&value),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
