//! Error handling for sudoers-store
//!
//! Wraps sudoers-core ExError with store-specific helpers

use std::path::Path;

use sudoers_core::errors::{ExError, ExErrorKind, SudoersError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for `path`
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_target(path.display().to_string())
        .with_message(err.to_string())
}

/// Lift a domain error, attaching the target it concerns
pub fn from_sudoers(target: &str, err: SudoersError) -> ExError {
    ExError::from(err).with_target(target.to_string())
}
