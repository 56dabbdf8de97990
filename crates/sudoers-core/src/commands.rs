//! Command types for changing the records of one target
//!
//! Commands are processed by the `apply()` function, which takes ownership of
//! a document, executes the command, and returns the updated document.

use crate::model::Record;

/// Desired-state changes to a sudoers document
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Make sure a record exists with exactly these fields
    ///
    /// An existing record of the same kind and name is updated in place;
    /// otherwise the record is appended after all existing ones.
    Ensure(Record),

    /// Mark every non-comment record with this name absent
    Remove { name: String },

    /// Mark every user spec that has no marker comment absent
    Purge,
}
