//! Render command
//!
//! Usage: sudoers render [--output <FILE>]

use clap::Args;
use std::path::{Path, PathBuf};

use sudoers_store::read_target;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute render command
pub fn execute(args: RenderArgs, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = read_target(target)?;
    let rendered = doc.render();

    // Output
    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered)?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
