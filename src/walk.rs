//! Input discovery: every regular file under a root, flattened.
//!
//! Traversal is depth-first in directory-listing order (whatever the
//! filesystem returns; not sorted). `walkdir` keeps its own stack of open
//! directories, so deep trees don't grow the call stack. Symbolic links are
//! not followed and are not regular files, so they never show up and cannot
//! form cycles.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// List all regular files below `root`, descending into subdirectories.
///
/// Directories themselves never appear in the result.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
