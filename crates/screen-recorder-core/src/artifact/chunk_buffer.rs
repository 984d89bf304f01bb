use tracing::trace;

/// Ordered, append-only store of encoded chunks for one session.
///
/// # Memory Footprint
///
/// Every chunk stays in memory until finalize. At the default 25 Mbps video
/// target a minute of recording is roughly 190MB, so long sessions are
/// bounded by what the host is willing to give the page.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    chunks: Vec<Vec<u8>>,
    total_bytes: usize,
}

impl ChunkBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk. Missing or empty chunks are dropped.
    ///
    /// Returns whether the chunk was kept.
    pub fn push(&mut self, chunk: Option<Vec<u8>>) -> bool {
        match chunk {
            Some(data) if !data.is_empty() => {
                self.total_bytes += data.len();
                self.chunks.push(data);
                trace!(
                    chunk_count = self.chunks.len(),
                    total_bytes = self.total_bytes,
                    "Chunk buffered"
                );
                true
            }
            _ => false,
        }
    }

    /// Number of chunks held.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunk has been kept.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Sum of all chunk sizes.
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Drops every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.total_bytes = 0;
    }

    /// Moves the chunks out, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<Vec<u8>> {
        self.total_bytes = 0;
        std::mem::take(&mut self.chunks)
    }
}
