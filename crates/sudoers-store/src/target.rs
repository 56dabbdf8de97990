//! Target file reading and writing
//!
//! ## Logging
//!
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! `sudoers-core` uses only `tracing::debug!()` for internal details.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use sudoers_core::{log_op_end, log_op_error, log_op_start, Document};

use crate::atomic::atomic_write;
use crate::digest::content_digest;
use crate::errors::{from_sudoers, io_error, Result};

/// Target used when none is configured
pub const DEFAULT_TARGET: &str = "/etc/sudoers";

/// Result of [`write_target`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Whether the file content was replaced
    pub changed: bool,
    /// SHA256 hex digest of the rendered content
    pub digest: String,
}

/// Read, parse and resolve a sudoers file
///
/// Blank lines are skipped and every record is stamped with `path`.
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - The first parse error, with its 1-based line number and raw text
pub fn read_target(path: &Path) -> Result<Document> {
    log_op_start!("read_target", target_path = %path.display());
    let start = Instant::now();

    let result = read_target_impl(path, false);
    finish_read(result, start)
}

/// Like [`read_target`], but a missing file reads as an empty document
///
/// # Errors
///
/// Same as [`read_target`], except for a file that does not exist.
pub fn read_target_if_exists(path: &Path) -> Result<Document> {
    log_op_start!("read_target", target_path = %path.display());
    let start = Instant::now();

    let result = read_target_impl(path, true);
    finish_read(result, start)
}

fn read_target_impl(path: &Path, allow_missing: bool) -> Result<Document> {
    let target = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(text) => read_target_str(&target, &text),
        Err(e) if allow_missing && e.kind() == ErrorKind::NotFound => {
            tracing::debug!(target_path = %target, "target missing, starting empty");
            Ok(Document::new(target))
        }
        Err(e) => Err(io_error("read_target", path, e)),
    }
}

fn finish_read(result: Result<Document>, start: Instant) -> Result<Document> {
    let doc = result.map_err(|e| {
        log_op_error!(
            "read_target",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "read_target",
        duration_ms = start.elapsed().as_millis() as u64,
        record_count = doc.len()
    );
    Ok(doc)
}

/// Parse and resolve in-memory text as the content of `target`
///
/// # Errors
///
/// The first parse error, tagged with `target`.
pub fn read_target_str(target: &str, text: &str) -> Result<Document> {
    Document::parse(target, text).map_err(|e| from_sudoers(target, e))
}

/// Render `doc` and write it to `path`
///
/// The write is skipped when the file already holds exactly the rendered
/// content. Otherwise the file is replaced atomically.
///
/// # Errors
///
/// `Io` if the existing file cannot be read or the new content cannot be
/// written.
pub fn write_target(path: &Path, doc: &Document) -> Result<WriteOutcome> {
    log_op_start!("write_target", target_path = %path.display());
    let start = Instant::now();

    let outcome = write_target_impl(path, doc).map_err(|e| {
        log_op_error!(
            "write_target",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "write_target",
        duration_ms = start.elapsed().as_millis() as u64,
        changed = outcome.changed,
        digest = %outcome.digest
    );
    Ok(outcome)
}

fn write_target_impl(path: &Path, doc: &Document) -> Result<WriteOutcome> {
    let rendered = doc.render();
    let digest = content_digest(rendered.as_bytes());

    let existing = match fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(io_error("write_target", path, e)),
    };

    if existing.as_deref() == Some(rendered.as_bytes()) {
        tracing::debug!(target_path = %path.display(), "content unchanged, skipping write");
        return Ok(WriteOutcome {
            changed: false,
            digest,
        });
    }

    atomic_write(path, rendered.as_bytes())?;
    Ok(WriteOutcome {
        changed: true,
        digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoers_core::errors::ExErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_read_target_str_tags_target() {
        let err = read_target_str("/etc/sudoers", "Defaults\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MalformedLine);
        assert_eq!(err.target(), Some("/etc/sudoers"));
        assert_eq!(err.line_no(), Some(1));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_target(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }

    #[test]
    fn test_missing_file_reads_empty_when_allowed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent");
        let doc = read_target_if_exists(&path).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.target(), path.display().to_string());
    }

    #[test]
    fn test_write_skips_identical_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sudoers");
        fs::write(&path, "Defaults env_reset\n").unwrap();

        let doc = read_target(&path).unwrap();
        let outcome = write_target(&path, &doc).unwrap();

        assert!(!outcome.changed);
        assert_eq!(outcome.digest, content_digest(b"Defaults env_reset\n"));
    }
}
