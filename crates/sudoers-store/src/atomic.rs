//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use crate::errors::{io_error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write bytes to a file
///
/// The temp file is uniquely named next to the target, so concurrent writers
/// never share one and the rename never crosses a filesystem. An existing
/// target's permissions carry over to the new file. The temp file is removed
/// on every error path when it is dropped.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    let dir = match target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    // Create parent directory if it doesn't exist
    fs::create_dir_all(dir).map_err(|e| io_error("create_target_dir", dir, e))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| io_error("create_target_temp", dir, e))?;
    temp.write_all(content)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| io_error("write_target_temp", temp.path(), e))?;

    if let Ok(meta) = fs::metadata(target_path) {
        fs::set_permissions(temp.path(), meta.permissions())
            .map_err(|e| io_error("copy_target_permissions", temp.path(), e))?;
    }

    // Atomically rename temp to target
    temp.persist(target_path)
        .map_err(|e| io_error("rename_target_temp", target_path, e.error))?;

    Ok(())
}
