//! Apply API Demonstration
//!
//! This example walks a small sudoers file through the `apply()` API.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Parsing and identity resolution (marker and synthetic names)
//! 2. Command-based changes threaded through owned documents
//! 3. Failed commands leave the document untouched
//! 4. Purging unmanaged rules

use sudoers_core::{apply, AliasKind, Command, Document, Record};

const SUDOERS: &str = "\
Defaults env_reset
# Puppet NAMEVAR admins
%admin ALL=(ALL) ALL
root ALL=(ALL:ALL) ALL
";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Sudoers Apply API Demo ===\n");

    // ===== Part 1: Parse and resolve =====
    println!("## Part 1: Identity resolution\n");

    let doc = Document::parse("/etc/sudoers", SUDOERS)?;
    for record in doc.records() {
        println!("  {:<10} {}", record.kind(), record.name());
    }

    // ===== Part 2: Ensure records =====
    println!("\n## Part 2: Ensure\n");

    let doc = apply(
        doc,
        Command::Ensure(Record::alias(
            AliasKind::Cmnd,
            "SHELLS",
            strings(&["/bin/sh", "/bin/bash"]),
        )),
    )?;
    let doc = apply(
        doc,
        Command::Ensure(
            Record::user_spec(strings(&["ops"]), strings(&["ALL"]), strings(&["SHELLS"]))
                .with_name("ops_shells")
                .with_comment("operators may open a shell"),
        ),
    )?;
    print!("{}", doc.render());

    // ===== Part 3: Rejected command =====
    println!("\n## Part 3: Validation\n");

    let bad = Record::alias(AliasKind::Host, "lowercase", strings(&["web1"]));
    match apply(doc.clone(), Command::Ensure(bad)) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }

    // ===== Part 4: Purge =====
    println!("\n## Part 4: Purge unmanaged rules\n");

    let doc = apply(doc, Command::Purge)?;
    print!("{}", doc.render());

    Ok(())
}
