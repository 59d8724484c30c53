//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader`, format sniffed from content |
//! | Rotate | `DynamicImage::rotate90` / `rotate180` / `rotate270` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |
//!
//! Each [`RustBackend::transform`] call decodes into a fresh buffer, encodes
//! into a fresh `Vec<u8>`, and drops everything on return. The backend itself
//! holds no state, so nothing accumulates across files.

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_height_fit;
use super::params::{EncodeProfile, EncodedImage, Rotation, TransformParams};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Apply quarter turns clockwise.
fn rotate(img: DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation.turns() {
        1 => img.rotate90(),
        2 => img.rotate180(),
        3 => img.rotate270(),
        _ => img,
    }
}

/// Resize to the profile's target height, keeping the aspect ratio.
///
/// Fails before allocating anything when the width would not fit in a JPEG.
fn resize_to_height(img: DynamicImage, target_height: u32) -> Result<DynamicImage, BackendError> {
    let source = (img.width(), img.height());
    let (width, height) = calculate_height_fit(source, target_height).ok_or_else(|| {
        BackendError::ProcessingFailed(format!(
            "{}x{} is too wide to resize to height {}",
            source.0, source.1, target_height
        ))
    })?;
    if (width, height) == source {
        return Ok(img);
    }
    Ok(img.resize_exact(width, height, FilterType::Lanczos3))
}

/// Encode into memory according to the profile.
fn encode(img: DynamicImage, profile: &EncodeProfile) -> Result<Vec<u8>, BackendError> {
    match profile.format {
        ImageFormat::Jpeg => encode_jpeg(img, profile.quality.value()),
        other => Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {:?}",
            other
        ))),
    }
}

/// JPEG has no alpha and no 16-bit mode, so everything goes through RGB8.
fn encode_jpeg(img: DynamicImage, quality: u8) -> Result<Vec<u8>, BackendError> {
    let rgb = DynamicImage::ImageRgb8(img.into_rgb8());
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))?;
    Ok(bytes)
}

impl ImageBackend for RustBackend {
    fn transform(&self, params: &TransformParams) -> Result<EncodedImage, BackendError> {
        let img = load_image(&params.source)?;
        let upright = rotate(img, params.rotation);
        let resized = resize_to_height(upright, params.profile.target_height)?;
        let bytes = encode(resized, &params.profile)?;
        Ok(EncodedImage {
            bytes,
            extension: params.profile.extension(),
        })
    }
}
