//! The batch pipeline: walk, orient, encode, write.
//!
//! ```text
//! input/                      output/
//! ├── photo.JPG   (EXIF 6)    ├── photo.jpg   rotated a quarter turn, 1500px high
//! └── 2023/
//!     └── scan.png            └── scan.jpg    1500px high
//! ```
//!
//! Files are handled one at a time, in discovery order, each finished (and
//! written) before the next one starts. The folder hierarchy is flattened: the
//! output name is the source file name with its last extension replaced, so
//! `a/x.png` and `b/x.jpg` both become `x.jpg` and the later one wins.
//!
//! ## Failures
//!
//! - Unreadable orientation metadata is reported as an event and the file is
//!   processed unrotated.
//! - Anything else (walk, decode, encode, write) ends the run with an error;
//!   files already written stay on disk.
//!
//! Progress goes out as [`ProcessEvent`]s on an optional channel so the
//! caller decides how to display it.

use crate::imaging::{BackendError, ImageBackend, Rotation, RustBackend, encode_image};
use crate::orientation::read_rotation;
use crate::walk::{WalkError, list_files};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to scan input: {0}")]
    Walk(#[from] WalkError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Cannot derive an output name from: {0}")]
    NoFileStem(PathBuf),
}

/// 1-based position of a file within the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
}

/// Progress reported while the pipeline runs, in processing order.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    ScanStarted {
        root: PathBuf,
    },
    ScanFinished {
        count: usize,
    },
    FileStarted {
        progress: Progress,
        source: PathBuf,
    },
    /// Orientation could not be read; the file continues with no rotation.
    OrientationUnreadable {
        source: PathBuf,
        reason: String,
    },
    FileWritten {
        progress: Progress,
        output: PathBuf,
    },
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct ProcessResult {
    /// Written files, in the order they were written.
    pub outputs: Vec<PathBuf>,
}

/// Where the encoded version of `source` goes.
///
/// `IMG_001.tar.JPG` → `<output_dir>/IMG_001.tar.<extension>`: only the last
/// extension is dropped.
pub fn output_path(
    output_dir: &Path,
    source: &Path,
    extension: &str,
) -> Result<PathBuf, ProcessError> {
    let stem = source
        .file_stem()
        .ok_or_else(|| ProcessError::NoFileStem(source.to_path_buf()))?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(extension);
    Ok(output_dir.join(name))
}

fn emit(events: Option<&Sender<ProcessEvent>>, event: ProcessEvent) {
    if let Some(tx) = events {
        // Receiver gone means nobody is watching; keep working
        let _ = tx.send(event);
    }
}

/// Walk `input_dir` and report how many files it holds.
///
/// Kept separate from [`process_files`] so a bad input path fails before
/// anything in the output folder is touched.
pub fn scan(
    input_dir: &Path,
    events: Option<&Sender<ProcessEvent>>,
) -> Result<Vec<PathBuf>, ProcessError> {
    emit(
        events,
        ProcessEvent::ScanStarted {
            root: input_dir.to_path_buf(),
        },
    );
    let files = list_files(input_dir)?;
    emit(events, ProcessEvent::ScanFinished { count: files.len() });
    Ok(files)
}

pub fn process(
    input_dir: &Path,
    output_dir: &Path,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, input_dir, output_dir, events)
}

/// Process images using a specific backend (allows testing with mock).
///
/// `output_dir` must already exist; see [`crate::outdir::prepare`].
pub fn process_with_backend(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let files = scan(input_dir, events.as_ref())?;
    process_files(backend, &files, output_dir, events)
}

/// Orient, encode and write each of `files`, in order.
pub fn process_files(
    backend: &impl ImageBackend,
    files: &[PathBuf],
    output_dir: &Path,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let events = events.as_ref();
    let total = files.len();

    let mut result = ProcessResult::default();
    for (i, source) in files.iter().enumerate() {
        let progress = Progress {
            index: i + 1,
            total,
        };
        emit(
            events,
            ProcessEvent::FileStarted {
                progress,
                source: source.clone(),
            },
        );

        let rotation = match read_rotation(source) {
            Ok(rotation) => rotation,
            Err(e) => {
                emit(
                    events,
                    ProcessEvent::OrientationUnreadable {
                        source: source.clone(),
                        reason: e.to_string(),
                    },
                );
                Rotation::NONE
            }
        };
        debug!(source = %source.display(), turns = rotation.turns(), "resolved orientation");

        let encoded = encode_image(backend, source, rotation)?;
        let output = output_path(output_dir, source, encoded.extension)?;
        std::fs::write(&output, &encoded.bytes).map_err(|e| ProcessError::Write {
            path: output.clone(),
            source: e,
        })?;
        debug!(output = %output.display(), bytes = encoded.bytes.len(), "wrote image");

        emit(
            events,
            ProcessEvent::FileWritten {
                progress,
                output: output.clone(),
            },
        );
        result.outputs.push(output);
    }

    Ok(result)
}
