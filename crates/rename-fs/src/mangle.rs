//! Deterministic temporary names for collision mangling
//!
//! A mangled name is derived only from the target path string, so the same
//! target always maps to the same temporary name on every run and platform.

use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Marker placed between the original file name and the digest
pub const MANGLE_MARKER: &str = "_temp_name_";

/// Number of hex characters of the SHA-256 digest kept in a mangled name
const DIGEST_LEN: usize = 16;

/// Short, stable hex digest of a path's string form.
pub fn path_digest(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..DIGEST_LEN].to_string()
}

/// Temporary name used while `path` is still occupied by another file.
///
/// Stays in the same directory as `path` so the two-phase rename never
/// crosses a filesystem boundary.
pub fn mangled_path(path: &Path) -> PathBuf {
    let suffix = format!("{}{}", MANGLE_MARKER, path_digest(path));

    match path.file_name() {
        Some(name) => {
            let mut mangled = OsString::from(name);
            mangled.push(&suffix);
            path.with_file_name(mangled)
        }
        None => {
            let mut mangled = path.as_os_str().to_os_string();
            mangled.push(&suffix);
            PathBuf::from(mangled)
        }
    }
}
