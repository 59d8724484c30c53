//! Shared test utilities: synthetic images and EXIF fixtures.
//!
//! Images are generated on the fly so the test suite needs no binary fixtures.
//! The integration tests include this file too, so the EXIF fixture bytes
//! are built in one place.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! create_oriented_jpeg(&tmp.path().join("photo.JPG"), 40, 20, 6);
//! create_test_png(&tmp.path().join("scan.png"), 40, 20);
//! ```

use image::codecs::jpeg::JpegEncoder;
use image::{ImageEncoder, ImageFormat, Rgb, RgbImage};
use std::path::Path;

// =========================================================================
// Synthetic images
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = gradient(width, height);
    let mut bytes = Vec::new();
    JpegEncoder::new(&mut bytes)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    bytes
}

/// Create a small valid JPEG with no EXIF block.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, encode_jpeg(width, height)).unwrap();
}

/// Create a small valid PNG (PNGs written by `image` carry no EXIF).
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient(width, height)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

// =========================================================================
// EXIF fixtures
// =========================================================================

/// Build a minimal APP1 segment holding only the Orientation tag.
///
/// Layout: marker(2) + length(2) + "Exif\0\0"(6) + TIFF header(8) + IFD0 with
/// one entry(18). Little-endian TIFF.
pub fn build_orientation_app1(tag: u16) -> Vec<u8> {
    let tiff_len: u16 = 8 + 2 + 12 + 4;
    let app1_len: u16 = 2 + 6 + tiff_len;

    let mut buf = Vec::with_capacity(2 + app1_len as usize);
    buf.extend_from_slice(&[0xFF, 0xE1]);
    buf.extend_from_slice(&app1_len.to_be_bytes());
    buf.extend_from_slice(b"Exif\0\0");

    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());

    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x0112u16.to_le_bytes());
    buf.extend_from_slice(&3u16.to_le_bytes()); // SHORT
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&tag.to_le_bytes());
    buf.extend_from_slice(&[0, 0]);

    buf.extend_from_slice(&0u32.to_le_bytes());
    buf
}

/// Splice an orientation APP1 segment into encoded JPEG bytes, right after SOI.
pub fn insert_orientation_app1(jpeg: &[u8], tag: u16) -> Vec<u8> {
    let app1 = build_orientation_app1(tag);
    let mut bytes = Vec::with_capacity(jpeg.len() + app1.len());
    bytes.extend_from_slice(&jpeg[..2]);
    bytes.extend_from_slice(&app1);
    bytes.extend_from_slice(&jpeg[2..]);
    bytes
}

/// Create a JPEG whose EXIF Orientation is `tag`.
pub fn create_oriented_jpeg(path: &Path, width: u32, height: u32, tag: u16) {
    let bytes = insert_orientation_app1(&encode_jpeg(width, height), tag);
    std::fs::write(path, bytes).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app1_segment_has_declared_length() {
        let seg = build_orientation_app1(6);
        let declared = u16::from_be_bytes([seg[2], seg[3]]) as usize;
        assert_eq!(seg.len(), declared + 2);
    }

    #[test]
    fn app1_lands_right_after_soi() {
        let jpeg = encode_jpeg(8, 8);
        let bytes = insert_orientation_app1(&jpeg, 8);
        assert_eq!(&bytes[..4], &[0xFF, 0xD8, 0xFF, 0xE1]);
        assert_eq!(bytes.len(), jpeg.len() + build_orientation_app1(8).len());
    }
}
