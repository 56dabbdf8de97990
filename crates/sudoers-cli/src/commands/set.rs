//! Set command
//!
//! Usage: sudoers set <NAME> --type <TYPE> [field options]
//!
//! Fields by type:
//! - default: `--parameter` (repeatable); NAME is the scope, e.g. `Defaults:ops`
//! - alias: `--alias-kind` and `--item` (repeatable)
//! - user_spec: `--user`, `--host`, `--command` (each repeatable)

use clap::Args;
use std::path::Path;

use sudoers_core::{AliasKind, Command, Record, RecordKind, SudoersError};

use super::apply_and_write;

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Record name (Defaults scope, alias name or rule name)
    pub name: String,

    /// Record type: default, alias or user_spec
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: RecordKind,

    /// Alias kind: Cmnd, Host, User or Runas (the _Alias suffix is optional)
    #[arg(long)]
    pub alias_kind: Option<AliasKind>,

    /// Defaults parameter
    #[arg(long = "parameter")]
    pub parameters: Vec<String>,

    /// Alias item
    #[arg(long = "item")]
    pub items: Vec<String>,

    /// User spec user
    #[arg(long = "user")]
    pub users: Vec<String>,

    /// User spec host
    #[arg(long = "host")]
    pub hosts: Vec<String>,

    /// User spec command
    #[arg(long = "command")]
    pub commands: Vec<String>,

    /// Comment line written above the record
    #[arg(long)]
    pub comment: Option<String>,
}

/// Execute set command
pub fn execute(args: SetArgs, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let record = build_record(args)?;
    apply_and_write(target, Command::Ensure(record))
}

fn build_record(args: SetArgs) -> Result<Record, SudoersError> {
    let record = match args.kind {
        RecordKind::Default => Record::defaults(args.name, args.parameters),
        RecordKind::Alias => {
            let alias_kind = args.alias_kind.ok_or(SudoersError::MissingAttribute {
                attribute: "alias_kind",
                kind: RecordKind::Alias,
            })?;
            Record::alias(alias_kind, args.name, args.items)
        }
        RecordKind::UserSpec => {
            Record::user_spec(args.users, args.hosts, args.commands).with_name(args.name)
        }
        RecordKind::Comment => {
            return Err(SudoersError::UnknownRecordType {
                value: RecordKind::Comment.to_string(),
            })
        }
    };

    Ok(match args.comment {
        Some(comment) => record.with_comment(comment),
        None => record,
    })
}
