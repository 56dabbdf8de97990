//! Core types shared across the sudoers facilities
//!
//! This crate provides foundational types used by the error handling and
//! logging facilities as well as the record model:
//!
//! - **Record classification**: RecordKind, Ensure
//! - **Schema constants**: Canonical field keys and event names

pub mod kind;
pub mod schema;

pub use kind::{Ensure, RecordKind, UnknownValue};
