//! Filesystem primitives for the migration stages

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::Output;

/// Creates a directory if it does not exist yet
///
/// Non-recursive: callers create parents first, in dependency order. A
/// pre-existing directory is a no-op, never an error; several stages call
/// this for the same path. Returns whether the directory was actually
/// created, so the caller can emit its single creation notice.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    fs::create_dir(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;

    Ok(true)
}

/// Ensures a directory exists and prints the creation notice when it was
/// actually created
pub fn materialize_dir(path: &Path, output: &Output) -> Result<()> {
    if ensure_dir(path)? {
        output.info(&format!("Created: {}", path.display()));
    }
    Ok(())
}

/// Moves a file out of the legacy tree into the workshop tree
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to)
        .with_context(|| format!("Failed to move {} to {}", from.display(), to.display()))
}

/// Copies a file, leaving the source in place
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))
}
