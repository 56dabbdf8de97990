//! Check command
//!
//! Usage: sudoers check

use std::path::Path;

use sudoers_store::read_target;

/// Execute check command
pub fn execute(target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = read_target(target)?;
    let unnamed = doc
        .records()
        .iter()
        .filter(|r| r.has_synthetic_name())
        .count();

    println!(
        "✓ {}: {} records ({} unnamed user specs)",
        target.display(),
        doc.len(),
        unnamed
    );
    Ok(())
}
