//! EXIF orientation → rotation count.
//!
//! Cameras store pixels in sensor order and record how the device was held in
//! the EXIF Orientation tag (`0x0112`). Only the pure rotations are honored:
//!
//! | Tag | Meaning | Quarter turns clockwise |
//! |---|---|---|
//! | 6 | rotated 90° CW to display | 1 |
//! | 3 | upside down | 2 |
//! | 8 | rotated 90° CCW to display | 3 |
//! | anything else, or no tag | — | 0 |
//!
//! Mirrored variants (2, 4, 5, 7) are left alone.
//!
//! Reading metadata is best effort: a file without EXIF, with a corrupt EXIF
//! block, or in a container `kamadak-exif` doesn't understand yields an
//! [`OrientationError`], which the pipeline downgrades to a warning and
//! treats as rotation 0.

use crate::imaging::Rotation;
use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrientationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),
}

impl Rotation {
    /// Map an EXIF orientation tag to quarter turns clockwise.
    pub fn from_tag(tag: Option<u32>) -> Self {
        match tag {
            Some(6) => Rotation::QUARTER,
            Some(8) => Rotation::THREE_QUARTERS,
            Some(3) => Rotation::HALF,
            _ => Rotation::NONE,
        }
    }
}

/// Read the raw orientation tag from the primary image.
///
/// `Ok(None)` means the EXIF block parsed but carries no orientation.
pub fn read_orientation_tag(path: &Path) -> Result<Option<u32>, OrientationError> {
    let file = File::open(path)?;
    let exif = Reader::new().read_from_container(&mut BufReader::new(file))?;
    Ok(exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0)))
}

/// Read the orientation tag and map it to a rotation.
pub fn read_rotation(path: &Path) -> Result<Rotation, OrientationError> {
    read_orientation_tag(path).map(Rotation::from_tag)
}
