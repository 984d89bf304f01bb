use crate::browser::{host_error, set_property};

use js_sys::{Array, Uint8Array};
use screen_recorder_core::{Artifact, ArtifactSink, HostError};
use tracing::{debug, instrument, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

/// Delivers artifacts as browser downloads through a temporary anchor.
pub(crate) struct DownloadSink {
    document: Document,
}

impl DownloadSink {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }

    fn click_download(&self, url: &str, filename: &str) -> Result<(), HostError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| HostError::new("Document has no body"))?;

        let anchor = self
            .document
            .create_element("a")
            .map_err(host_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| HostError::new("Created element is not an anchor"))?;
        anchor.set_href(url);
        anchor.set_download(filename);

        // Some browsers ignore clicks on detached anchors.
        body.append_child(&anchor).map_err(host_error)?;
        anchor.click();
        body.remove_child(&anchor).map_err(host_error)?;

        Ok(())
    }
}

impl ArtifactSink for DownloadSink {
    #[instrument(skip(self, artifact), fields(filename = %artifact.filename()))]
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), HostError> {
        let blob = artifact_blob(artifact).map_err(host_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(host_error)?;

        let clicked = self.click_download(&url, artifact.filename());

        // The object URL must outlive the click that starts the download.
        if let Err(e) = Url::revoke_object_url(&url) {
            warn!(error = ?e, "Failed to revoke object URL");
        }

        if clicked.is_ok() {
            debug!(size = blob.size(), "Download triggered");
        }

        clicked
    }
}

/// A `Blob` holding the artifact bytes, typed with its media type.
fn artifact_blob(artifact: &Artifact) -> Result<Blob, JsValue> {
    let parts = Array::of1(&Uint8Array::from(artifact.data()));

    let options = BlobPropertyBag::new();
    set_property(&options, "type", &JsValue::from_str(artifact.media_type()))?;

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}
