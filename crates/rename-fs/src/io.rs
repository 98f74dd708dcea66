//! Guarded renames and atomic text I/O

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Check whether anything occupies `path`, without following symlinks.
///
/// A dangling symlink counts as occupied: renaming onto it would replace it.
pub fn target_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Rename `from` to `to`, refusing to replace an existing entry.
///
/// The existence check happens immediately before the rename. The rename
/// itself is whatever atomicity the platform's `rename(2)` gives; nothing
/// here is transactional across calls.
pub fn rename_no_clobber(from: &Path, to: &Path) -> Result<()> {
    if target_exists(to)? {
        return Err(Error::AlreadyExists {
            path: to.to_path_buf(),
        });
    }
    if from == to {
        return Ok(());
    }

    tracing::trace!(from = %from.display(), to = %to.display(), "rename");
    fs::rename(from, to).map_err(|e| Error::io(from, e))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so the target is never observed half
/// written. Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the final rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
