//! Sudoers Store - reading and writing target files
//!
//! Provides:
//! - `read_target` to parse and resolve a sudoers file into a `Document`
//! - `write_target` to render a `Document` back, atomically and only when
//!   the content changed
//! - SHA-256 content digests for change reporting
//!
//! This layer owns the lifecycle logging (`start`/`end`/`end_error`) for
//! file operations.

pub mod atomic;
pub mod digest;
pub mod errors;
pub mod target;

// Re-export key types
pub use errors::Result;
pub use target::{
    read_target, read_target_if_exists, read_target_str, write_target, WriteOutcome,
    DEFAULT_TARGET,
};
