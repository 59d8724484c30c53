//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Output folder out is not empty (2 entries). Delete them? [y/n] y
//! INFO Deleted 2 entries from out
//! INFO Scanning input folder photos
//! INFO Found 2 files
//! INFO File 1/2: photos/photo.JPG
//! INFO     → out/photo.jpg
//! INFO File 2/2: photos/scan.png
//! WARN No orientation for photos/scan.png, leaving it as is: EXIF error: ...
//! INFO     → out/scan.jpg
//! INFO Done: 2 images written to out
//! ```
//!
//! Colors come from the `tracing-subscriber` level styling set up in `main`.
//!
//! # Architecture
//!
//! Each kind of output has a `format_*` function (pure, returns `String`) for
//! testability and, where it is logged, a `print_*` wrapper that picks the
//! level and emits it through `tracing`.

use crate::outdir::Prepared;
use crate::process::{ProcessEvent, ProcessResult};
use std::path::Path;
use tracing::{info, warn};

/// `1 file`, `3 files`.
fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

// ============================================================================
// Output folder
// ============================================================================

/// The yes/no question asked before clearing a non-empty output folder.
pub fn format_delete_prompt(dir: &Path, entries: usize) -> String {
    format!(
        "Output folder {} is not empty ({}). Delete them? [y/n] ",
        dir.display(),
        plural(entries, "entry", "entries")
    )
}

pub fn format_prepared(dir: &Path, prepared: Prepared) -> String {
    match prepared {
        Prepared::Created => format!("Created output folder {}", dir.display()),
        Prepared::Empty => format!("Output folder {} is empty", dir.display()),
        Prepared::Cleared(n) => format!(
            "Deleted {} from {}",
            plural(n, "entry", "entries"),
            dir.display()
        ),
        Prepared::Kept(n) => format!(
            "Keeping {} in {}; same-named files will be overwritten",
            plural(n, "existing entry", "existing entries"),
            dir.display()
        ),
    }
}

pub fn print_prepared(dir: &Path, prepared: Prepared) {
    info!("{}", format_prepared(dir, prepared));
}

// ============================================================================
// Processing
// ============================================================================

/// Format a single progress event as one display line.
pub fn format_process_event(event: &ProcessEvent) -> String {
    match event {
        ProcessEvent::ScanStarted { root } => {
            format!("Scanning input folder {}", root.display())
        }
        ProcessEvent::ScanFinished { count } => {
            format!("Found {}", plural(*count, "file", "files"))
        }
        ProcessEvent::FileStarted { progress, source } => format!(
            "File {}/{}: {}",
            progress.index,
            progress.total,
            source.display()
        ),
        ProcessEvent::OrientationUnreadable { source, reason } => format!(
            "No orientation for {}, leaving it as is: {}",
            source.display(),
            reason
        ),
        ProcessEvent::FileWritten { output, .. } => format!("    → {}", output.display()),
    }
}

/// Log an event at the level it deserves: metadata problems are warnings.
pub fn print_process_event(event: &ProcessEvent) {
    let line = format_process_event(event);
    match event {
        ProcessEvent::OrientationUnreadable { .. } => warn!("{line}"),
        _ => info!("{line}"),
    }
}

pub fn format_summary(result: &ProcessResult, output_dir: &Path) -> String {
    format!(
        "Done: {} written to {}",
        plural(result.outputs.len(), "image", "images"),
        output_dir.display()
    )
}

pub fn print_summary(result: &ProcessResult, output_dir: &Path) {
    info!("{}", format_summary(result, output_dir));
}
