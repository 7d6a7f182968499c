//! Reading and writing the target file.
//!
//! [`write_in_place`] truncates and rewrites the file, so an interrupted
//! write loses the original. [`write_atomic`] stages the new text in a temp
//! file beside the target and renames it over the original.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FixError;

/// Read the whole target as UTF-8 text.
///
/// # Errors
///
/// Returns [`FixError::Read`] if the file is missing, unreadable, or not
/// valid UTF-8.
pub fn read_source(path: &Path) -> Result<String, FixError> {
    fs::read_to_string(path).map_err(|source| FixError::Read { path: path.to_path_buf(), source })
}

/// Truncate the target and write `text` into it.
///
/// # Errors
///
/// Returns [`FixError::Write`] on any I/O failure.
pub fn write_in_place(path: &Path, text: &str) -> Result<(), FixError> {
    fs::write(path, text).map_err(|source| FixError::Write { path: path.to_path_buf(), source })
}

/// Write `text` to a sibling temp file, then rename it over the target.
///
/// # Errors
///
/// Returns [`FixError::Write`] if the temp file cannot be created or
/// written, and [`FixError::Persist`] if the final rename fails. The
/// original file is intact in both cases.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), FixError> {
    let write_err = |source| FixError::Write { path: path.to_path_buf(), source };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(text.as_bytes()).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    staged
        .persist(path)
        .map_err(|e| FixError::Persist { path: path.to_path_buf(), source: e.error })?;
    Ok(())
}

#[cfg(test)]
#[path = "target_test.rs"]
mod tests;
