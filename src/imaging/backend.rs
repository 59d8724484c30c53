//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the one operation the pipeline needs:
//! turn a source file plus a rotation into encoded bytes.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::{EncodedImage, TransformParams};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// A call owns every resource it allocates (decoder, pixel buffers, encoder)
/// and releases them before returning, whether it succeeds or fails.
pub trait ImageBackend {
    /// Decode `params.source`, rotate, resize and encode per `params.profile`.
    fn transform(&self, params: &TransformParams) -> Result<EncodedImage, BackendError>;
}
