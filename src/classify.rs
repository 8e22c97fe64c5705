//! Filesystem status queries that never fail.
//!
//! Any error from the underlying `stat` call is treated as "no": a path we
//! cannot inspect is reported as missing rather than aborting the run.

use std::fs;
use std::path::Path;

/// Returns `true` if `path` exists (following symlinks).
pub fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns `true` if `path` is a directory (following symlinks).
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Returns `true` if `path` is a regular file (following symlinks).
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
