//! List command
//!
//! Usage: sudoers list [--json]

use clap::Args;
use std::path::Path;

use sudoers_core::{Record, RecordKind};
use sudoers_store::read_target;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute list command
pub fn execute(args: ListArgs, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = read_target(target)?;
    let records: Vec<&Record> = doc.present_records().collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in records {
        println!("{}\t{}\t{}", record.kind(), record.name(), summary(record));
    }
    Ok(())
}

/// The record's own line, without any marker or comment lines
fn summary(record: &Record) -> String {
    match record.kind() {
        RecordKind::Comment => record.comment_text().trim().to_string(),
        _ => sudoers_core::to_lines(&record.clone().with_comment(""))
            .pop()
            .unwrap_or_default(),
    }
}
