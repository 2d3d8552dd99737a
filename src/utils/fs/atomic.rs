//! Atomic file write operations using a temp-and-rename strategy.

use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Writes a string to a file atomically.
///
/// Convenience wrapper around [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file.
///
/// The content goes to a temporary file in the target's directory, is synced
/// to disk, and is then renamed over the target. Readers see either the old
/// content or the new content, never a partial write. Parent directories are
/// created as needed.
///
/// # Errors
///
/// Fails if the parent directory cannot be created or any step of the write
/// or rename fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent).with_context(|| {
        let platform_help = if crate::utils::platform::is_windows() {
            "On Windows: Check file permissions, path length, and that directory exists"
        } else {
            "Check file permissions and that directory exists"
        };

        format!("Failed to create temp file in: {}\n\n{}", parent.display(), platform_help)
    })?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
