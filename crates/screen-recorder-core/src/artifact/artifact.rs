/// Bytes per megabyte used for size reporting.
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A finished recording, ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub(crate) data: Vec<u8>,
    pub(crate) filename: String,
    pub(crate) media_type: String,
}

impl Artifact {
    /// Encoded media bytes, chunks concatenated in emission order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Generated download filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Declared media type (the negotiated MIME type).
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Size in megabytes (1 MB = 1 048 576 bytes).
    pub fn size_mb(&self) -> f64 {
        self.data.len() as f64 / BYTES_PER_MB
    }

    /// Consumes the artifact, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
