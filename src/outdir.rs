//! Output directory preparation.
//!
//! The destination is made ready in three separate steps so the decision can
//! be tested without touching the filesystem:
//!
//! 1. [`collect_entries`] — list what is directly inside the directory
//! 2. [`confirm`] — ask yes/no on any reader/writer pair
//! 3. [`remove_entries`] — delete, immediately and irreversibly
//!
//! [`prepare`] strings them together. A missing directory is created with its
//! parents and never prompts; an empty one needs no confirmation either.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutDirError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Output path exists and is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// What [`prepare`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prepared {
    /// Directory did not exist and was created.
    Created,
    /// Directory existed and was already empty.
    Empty,
    /// Existing entries were deleted.
    Cleared(usize),
    /// Deletion was declined; existing entries stay.
    Kept(usize),
}

/// Interpret one line of user input.
///
/// `y`/`yes` → `Some(true)`, `n`/`no` → `Some(false)`, case-insensitive and
/// ignoring surrounding whitespace. Anything else → `None`.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompt until a yes/no answer arrives.
///
/// End of input is a "no": nothing gets deleted without an explicit yes.
pub fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    let mut line = String::new();
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(false);
        }
        if let Some(answer) = parse_answer(&line) {
            return Ok(answer);
        }
    }
}

/// Entries directly inside `dir` (files and subdirectories), not recursive.
pub fn collect_entries(dir: &Path) -> Result<Vec<PathBuf>, OutDirError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(entry?.path());
    }
    Ok(entries)
}

/// Delete each entry; subdirectories go with everything inside them.
pub fn remove_entries(entries: &[PathBuf]) -> Result<(), OutDirError> {
    for entry in entries {
        // symlink_metadata: remove a link to a directory, not its target
        if fs::symlink_metadata(entry)?.is_dir() {
            fs::remove_dir_all(entry)?;
        } else {
            fs::remove_file(entry)?;
        }
    }
    Ok(())
}

/// Make `dir` ready to receive output.
///
/// `confirm_delete` is only called when `dir` exists and has entries; it gets
/// the collected entries and decides whether they are removed.
pub fn prepare<F>(dir: &Path, confirm_delete: F) -> Result<Prepared, OutDirError>
where
    F: FnOnce(&[PathBuf]) -> io::Result<bool>,
{
    match fs::metadata(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir)?;
            return Ok(Prepared::Created);
        }
        Err(e) => return Err(e.into()),
        Ok(meta) if !meta.is_dir() => {
            return Err(OutDirError::NotADirectory(dir.to_path_buf()));
        }
        Ok(_) => {}
    }

    let entries = collect_entries(dir)?;
    if entries.is_empty() {
        return Ok(Prepared::Empty);
    }

    if confirm_delete(&entries)? {
        remove_entries(&entries)?;
        Ok(Prepared::Cleared(entries.len()))
    } else {
        Ok(Prepared::Kept(entries.len()))
    }
}
