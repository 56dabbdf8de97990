//! Functional-boundary apply function
//!
//! `apply()` is the entry point for changing a [`Document`]. Every command
//! is checked before anything is touched, so an error leaves no partial
//! change behind.
//!
//! ## Example
//!
//! ```
//! use sudoers_core::{apply, Command, Document, Record};
//!
//! let doc = Document::parse("/etc/sudoers", "Defaults env_reset\n").unwrap();
//! let cmd = Command::Ensure(
//!     Record::defaults("Defaults", vec!["env_reset".into(), "mail_badpass".into()]),
//! );
//!
//! let doc = apply(doc, cmd).unwrap();
//! assert_eq!(doc.render(), "Defaults env_reset,mail_badpass\n");
//! ```

use sudoers_core_types::{Ensure, RecordKind};

use crate::commands::Command;
use crate::document::Document;
use crate::errors::{Result, SudoersError};
use crate::model::Record;
use crate::rules::schema;

/// Apply a command to a document, returning the updated document
///
/// # Errors
///
/// - Validation errors from [`schema::validate`] for `Ensure`
/// - `RecordNotFound` for `Remove` when no record carries the name
pub fn apply(mut doc: Document, cmd: Command) -> Result<Document> {
    match cmd {
        Command::Ensure(record) => {
            ensure(&mut doc, record)?;
            Ok(doc)
        }
        Command::Remove { name } => {
            remove(&mut doc, &name)?;
            Ok(doc)
        }
        Command::Purge => {
            let purged = purge(&mut doc);
            tracing::debug!(purged, "purged unmanaged user specs");
            Ok(doc)
        }
    }
}

fn ensure(doc: &mut Document, record: Record) -> Result<()> {
    schema::validate(&record)?;

    if record.ensure == Ensure::Absent {
        return match remove(doc, &record.name) {
            Err(SudoersError::RecordNotFound { .. }) => Ok(()),
            other => other,
        };
    }

    let existing = match record.kind() {
        // Comments have no identity beyond their text
        RecordKind::Comment => doc.records().iter().position(|r| {
            r.is_present() && r.kind() == RecordKind::Comment && r.comment == record.comment
        }),
        kind => doc.position(kind, &record.name),
    };

    match existing {
        Some(index) => {
            let mut record = record;
            if record.kind() != RecordKind::Comment
                && comment_line_precedes(doc, index, &record.comment)
            {
                // The comment line from an earlier write already sits above it
                record.comment.clear();
            }
            if doc.records()[index].body != record.body
                || doc.records()[index].comment != record.comment
            {
                tracing::debug!(name = %record.name, index, "updating record in place");
                doc.replace(index, record)?;
            }
        }
        None => {
            tracing::debug!(name = %record.name, kind = %record.kind(), "appending record");
            doc.push(record);
        }
    }
    Ok(())
}

/// Whether the nearest present record before `index` is a plain comment
/// reading `comment`
///
/// A record's comment is written as its own `# text` line and reads back
/// as a separate comment record in front of it.
fn comment_line_precedes(doc: &Document, index: usize, comment: &str) -> bool {
    let comment = comment.trim();
    if comment.is_empty() {
        return false;
    }
    doc.records()[..index]
        .iter()
        .rev()
        .find(|r| r.is_present())
        .is_some_and(|r| {
            r.kind() == RecordKind::Comment
                && r.declared_name().is_none()
                && r.comment.trim() == comment
        })
}

fn remove(doc: &mut Document, name: &str) -> Result<()> {
    let mut removed = 0usize;
    for record in doc.records_mut() {
        if record.is_present() && record.kind() != RecordKind::Comment && record.name == name {
            record.ensure = Ensure::Absent;
            removed += 1;
        }
    }
    if removed == 0 {
        return Err(SudoersError::RecordNotFound {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn purge(doc: &mut Document) -> usize {
    let mut purged = 0usize;
    for record in doc.records_mut() {
        if record.is_present() && record.kind() == RecordKind::UserSpec && record.has_synthetic_name()
        {
            record.ensure = Ensure::Absent;
            purged += 1;
        }
    }
    purged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AliasKind;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ensure_updates_in_place() {
        let doc = Document::parse("t", "Cmnd_Alias SHELLS = /bin/sh\nDefaults env_reset\n").unwrap();
        let cmd = Command::Ensure(Record::alias(
            AliasKind::Cmnd,
            "SHELLS",
            strings(&["/bin/sh", "/bin/bash"]),
        ));

        let doc = apply(doc, cmd).unwrap();
        assert_eq!(
            doc.render(),
            "Cmnd_Alias SHELLS=/bin/sh,/bin/bash\nDefaults env_reset\n"
        );
    }

    #[test]
    fn test_ensure_absent_of_missing_record_is_noop() {
        let doc = Document::parse("t", "Defaults env_reset\n").unwrap();
        let record = Record::alias(AliasKind::Cmnd, "GONE", vec![]).with_ensure(Ensure::Absent);
        let doc = apply(doc, Command::Ensure(record)).unwrap();
        assert_eq!(doc.render(), "Defaults env_reset\n");
    }

    #[test]
    fn test_invalid_ensure_leaves_nothing_behind() {
        let doc = Document::parse("t", "Defaults env_reset\n").unwrap();
        let bad = Record::alias(AliasKind::Cmnd, "lower", strings(&["/bin/sh"]));
        let err = apply(doc, Command::Ensure(bad)).unwrap_err();
        assert!(matches!(err, SudoersError::InvalidAliasName { .. }));
    }

    #[test]
    fn test_remove_unknown_name_fails() {
        let doc = Document::parse("t", "Defaults env_reset\n").unwrap();
        let err = apply(
            doc,
            Command::Remove {
                name: "nobody".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            SudoersError::RecordNotFound {
                name: "nobody".to_string()
            }
        );
    }

    #[test]
    fn test_purge_only_touches_unnamed_user_specs() {
        let text = "# Puppet NAMEVAR keep\nalice ALL=ALL\nbob ALL=ALL\n";
        let doc = apply(Document::parse("t", text).unwrap(), Command::Purge).unwrap();
        assert_eq!(doc.render(), "# Puppet NAMEVAR keep\nalice ALL=ALL\n");
    }

    #[test]
    fn test_reapplying_commented_record_keeps_one_comment() {
        let desired = Record::user_spec(strings(&["ops"]), strings(&["ALL"]), strings(&["ALL"]))
            .with_name("ops_all")
            .with_comment("operators");

        let mut text = String::new();
        for _ in 0..3 {
            let doc = Document::parse("t", &text).unwrap();
            text = apply(doc, Command::Ensure(desired.clone())).unwrap().render();
        }

        assert_eq!(text, "# operators\n# Puppet NAMEVAR ops_all\nops ALL=ALL\n");
    }

    #[test]
    fn test_update_keeps_existing_comment_line() {
        let text = "# shells\nCmnd_Alias SHELLS=/bin/sh\n";
        let desired = Record::alias(AliasKind::Cmnd, "SHELLS", strings(&["/bin/sh", "/bin/bash"]))
            .with_comment("shells");

        let doc = apply(Document::parse("t", text).unwrap(), Command::Ensure(desired)).unwrap();
        assert_eq!(doc.render(), "# shells\nCmnd_Alias SHELLS=/bin/sh,/bin/bash\n");
    }

    #[test]
    fn test_ensure_existing_comment_is_not_duplicated() {
        let doc = Document::parse("t", "# keep me\n").unwrap();
        let doc = apply(doc, Command::Ensure(Record::comment(" keep me"))).unwrap();
        assert_eq!(doc.render(), "# keep me\n");
    }
}
