pub mod check;
pub mod list;
pub mod remove;
pub mod render;
pub mod set;

use std::path::Path;

use sudoers_core::{apply, Command, Document};
use sudoers_store::errors::from_sudoers;
use sudoers_store::{read_target_if_exists, write_target};

/// Read the target, apply one command and write the result back
pub(crate) fn apply_and_write(
    target: &Path,
    cmd: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = read_target_if_exists(target)?;
    let target_name = doc.target().to_string();
    let doc: Document = apply(doc, cmd).map_err(|e| from_sudoers(&target_name, e))?;

    let outcome = write_target(target, &doc)?;
    if outcome.changed {
        println!("✓ Updated {} (digest: {})", target.display(), outcome.digest);
    } else {
        println!("✓ {} unchanged (digest: {})", target.display(), outcome.digest);
    }
    Ok(())
}
