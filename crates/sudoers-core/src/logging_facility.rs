//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use sudoers_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! Lifecycle events (`start`, `end`, `end_error`) are owned by the layer that
//! touches the filesystem. Parsing, resolution and serialization only emit
//! `tracing::debug!` details.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
