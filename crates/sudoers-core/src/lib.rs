//! Sudoers Core - records, line codec and identity resolution
//!
//! This crate provides the in-memory side of managing a sudoers file:
//! - A closed record model for defaults, aliases, user specs and comments
//! - A line parser and its inverse serializer
//! - The identity resolver that names user specs from marker comments
//! - Schema validation for desired records
//! - A `Document` per target file and the `apply()` reconciliation entry point
//!
//! Nothing here performs I/O; see `sudoers-store` for reading and writing
//! target files.

pub mod apply;
pub mod commands;
pub mod document;
pub mod errors;
pub mod line;
pub mod logging_facility;
pub mod model;
pub mod resolver;
pub mod rules;

// Used by the logging macros
#[doc(hidden)]
pub use sudoers_core_types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use document::Document;
pub use errors::{ExError, ExErrorKind, Result, SudoersError};
pub use line::{parse_line, render, to_line, to_lines};
pub use model::{AliasKind, Record, RecordBody};
pub use resolver::{resolve, IdentityResolver};
pub use sudoers_core_types::{Ensure, RecordKind};
