//! High-level image operations.
//!
//! These functions combine the fixed encoder profile with backend execution.

use super::backend::{BackendError, ImageBackend};
use super::params::{EncodeProfile, EncodedImage, Rotation, TransformParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Plan a transform without executing it.
///
/// Every image gets the same [`EncodeProfile`]; only source and rotation vary.
pub fn plan_transform(source: &Path, rotation: Rotation) -> TransformParams {
    TransformParams {
        source: source.to_path_buf(),
        rotation,
        profile: EncodeProfile::default(),
    }
}

/// Decode, orient, resize and encode one file.
pub fn encode_image(
    backend: &impl ImageBackend,
    source: &Path,
    rotation: Rotation,
) -> Result<EncodedImage> {
    let params = plan_transform(source, rotation);
    backend.transform(&params)
}
