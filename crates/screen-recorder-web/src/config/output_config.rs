use crate::config::{default_file_extension, default_filename_prefix};

use serde::{Deserialize, Serialize};

/// Download naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prefix before the timestamp.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Extension without the dot.
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename_prefix: default_filename_prefix(),
            file_extension: default_file_extension(),
        }
    }
}
