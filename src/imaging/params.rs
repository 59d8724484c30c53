//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the [`operations`](super::operations) module (which decides what to encode)
//! and the [`backend`](super::backend) (which does the pixel work), so a mock
//! backend can stand in during tests.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100). Clamped on construction.
//! - [`Rotation`] — Quarter turns clockwise, one of four constants.
//! - [`EncodeProfile`] — The fixed output policy: target height, quality, format.
//! - [`TransformParams`] — Everything a backend needs to turn one source file into bytes.

use image::ImageFormat;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Number of 90° clockwise turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(u8);

impl Rotation {
    pub const NONE: Rotation = Rotation(0);
    pub const QUARTER: Rotation = Rotation(1);
    pub const HALF: Rotation = Rotation(2);
    pub const THREE_QUARTERS: Rotation = Rotation(3);

    pub fn turns(self) -> u8 {
        self.0
    }
}

/// Fixed encoder profile applied to every image.
///
/// Output is always JPEG; only the height is targeted and the width follows
/// from the aspect ratio of the upright image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeProfile {
    pub target_height: u32,
    pub quality: Quality,
    pub format: ImageFormat,
}

impl EncodeProfile {
    pub const TARGET_HEIGHT: u32 = 1500;
    pub const QUALITY: u8 = 75;

    /// Canonical file extension of the output format, without the dot.
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("bin")
    }
}

impl Default for EncodeProfile {
    fn default() -> Self {
        Self {
            target_height: Self::TARGET_HEIGHT,
            quality: Quality::new(Self::QUALITY),
            format: ImageFormat::Jpeg,
        }
    }
}

/// Parameters for turning one source file into encoded output.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    pub source: PathBuf,
    pub rotation: Rotation,
    pub profile: EncodeProfile,
}

/// Encoded output for one image, ready to be written and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn default_profile_is_jpeg_q75_h1500() {
        let profile = EncodeProfile::default();
        assert_eq!(profile.target_height, 1500);
        assert_eq!(profile.quality.value(), 75);
        assert_eq!(profile.format, ImageFormat::Jpeg);
        assert_eq!(profile.extension(), "jpg");
    }
}
