#[allow(clippy::module_inception)]
mod artifact;
mod chunk_buffer;
mod finalizer;

pub use {
    artifact::Artifact,
    chunk_buffer::ChunkBuffer,
    finalizer::{artifact_filename, finalize},
};
