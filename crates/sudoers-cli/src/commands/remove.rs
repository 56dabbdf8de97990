//! Remove and purge commands
//!
//! Usage: sudoers remove <NAME>
//!        sudoers purge

use clap::Args;
use std::path::Path;

use sudoers_core::Command;

use super::apply_and_write;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Name of the record(s) to remove
    pub name: String,
}

/// Execute remove command
pub fn execute(args: RemoveArgs, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    apply_and_write(target, Command::Remove { name: args.name })
}

/// Execute purge command
pub fn execute_purge(target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    apply_and_write(target, Command::Purge)
}
