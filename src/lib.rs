//! # shrinkpics
//!
//! Batch-process a folder of images for sharing: turn each one upright using
//! its EXIF orientation, scale it to 1500px high, and recompress it as a
//! quality-75 JPEG into a flat output folder.
//!
//! # Architecture: One Straight Pipeline
//!
//! ```text
//! input/ ── walk ──► files ──┬─► orientation ──► rotation
//!                            └─► imaging (decode → rotate → resize → encode)
//!                                     │
//! output/ ◄── outdir (prepared once) ◄┘ write <stem>.jpg
//! ```
//!
//! Every file is finished before the next one starts. There is no queue and no
//! worker pool; output order is discovery order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | Recursively lists regular files under the input folder |
//! | [`orientation`] | Reads the EXIF Orientation tag and maps it to quarter turns |
//! | [`imaging`] | Decode, rotate, resize and JPEG-encode one image, behind [`imaging::ImageBackend`] |
//! | [`outdir`] | Creates the output folder or clears it after confirmation |
//! | [`process`] | Drives the per-file loop and reports progress events |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fixed Encoder Profile
//!
//! Height, quality and format are constants in [`imaging::EncodeProfile`].
//! The tool does one job the same way every time; there is nothing to
//! configure beyond where to read and where to write.
//!
//! ## Orientation Is Best Effort
//!
//! PNGs, screenshots and scans usually carry no EXIF at all. A missing or
//! broken orientation tag is reported as a warning and the image is kept as
//! stored. Only the three pure rotations (tags 3, 6, 8) are applied.
//!
//! ## Decode Failures Stop the Run
//!
//! Any file the decoder can't read ends the batch with an error. Files already
//! written stay in the output folder.
//!
//! ## Confirm Before Deleting
//!
//! A non-empty output folder is only cleared after an explicit yes. The
//! decision ([`outdir::confirm`]) is separate from the deletion
//! ([`outdir::remove_entries`]) so the prompt logic is testable on in-memory
//! readers. The input folder is scanned first ([`process::scan`]), so a
//! missing input path fails before the prompt is ever shown.

pub mod imaging;
pub mod orientation;
pub mod outdir;
pub mod output;
pub mod process;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
