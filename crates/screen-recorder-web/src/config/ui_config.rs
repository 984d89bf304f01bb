use crate::config::{
    default_indicator_id, default_start_button_id, default_status_id, default_stop_button_id,
};

use serde::{Deserialize, Serialize};

/// Element ids of the page controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start button.
    #[serde(default = "default_start_button_id")]
    pub start_button_id: String,

    /// Stop button.
    #[serde(default = "default_stop_button_id")]
    pub stop_button_id: String,

    /// Single-line status text.
    #[serde(default = "default_status_id")]
    pub status_id: String,

    /// Recording-in-progress indicator.
    #[serde(default = "default_indicator_id")]
    pub indicator_id: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_button_id: default_start_button_id(),
            stop_button_id: default_stop_button_id(),
            status_id: default_status_id(),
            indicator_id: default_indicator_id(),
        }
    }
}
