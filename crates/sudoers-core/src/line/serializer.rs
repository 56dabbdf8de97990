//! Line serializer
//!
//! Inverse of [`parse_line`](super::parse_line) plus [`resolve`](crate::resolver::resolve):
//! a named user spec is written with the marker comment that restores its
//! name on the next read.

use super::parser::{MARKER_KEYWORD, MARKER_TAG};
use crate::model::{Record, RecordBody};

/// Serialize one record to its physical lines
///
/// Absent records produce no lines. Comment records are written as `#`
/// followed by their text exactly as captured. A non-empty comment on any
/// other record is written as its own `# <comment>` line in front of it.
pub fn to_lines(record: &Record) -> Vec<String> {
    let mut lines = Vec::new();
    if !record.is_present() {
        return lines;
    }

    match &record.body {
        RecordBody::Comment {
            declared_name: Some(name),
        } => lines.push(marker_line(name)),
        RecordBody::Comment {
            declared_name: None,
        } => lines.push(format!("#{}", record.comment)),
        RecordBody::Default { parameters } => {
            push_comment(&mut lines, record);
            lines.push(format!("{} {}", record.name, parameters.join(",")));
        }
        RecordBody::Alias { alias_kind, items } => {
            push_comment(&mut lines, record);
            lines.push(format!("{} {}={}", alias_kind, record.name, items.join(",")));
        }
        RecordBody::UserSpec {
            users,
            hosts,
            commands,
        } => {
            push_comment(&mut lines, record);
            if !record.name.is_empty() && !record.has_synthetic_name() {
                lines.push(marker_line(&record.name));
            }
            lines.push(format!(
                "{} {}={}",
                users.join(","),
                hosts.join(","),
                commands.join(",")
            ));
        }
    }

    lines
}

/// Serialize one record, joining multiple physical lines with `\n`
pub fn to_line(record: &Record) -> String {
    to_lines(record).join("\n")
}

/// Serialize a whole file, one line per entry and a trailing newline
pub fn render(records: &[Record]) -> String {
    let mut out = String::new();
    for line in records.iter().flat_map(to_lines) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// `# Puppet NAMEVAR <name>`
pub fn marker_line(name: &str) -> String {
    format!("# {} {} {}", MARKER_TAG, MARKER_KEYWORD, name)
}

fn push_comment(lines: &mut Vec<String>, record: &Record) {
    let text = record.comment.trim();
    if !text.is_empty() {
        lines.push(format!("# {}", text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AliasKind;
    use sudoers_core_types::Ensure;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_line() {
        let record = Record::defaults("Defaults@host", strings(&["x=y", "one=1", "two=2"]));
        assert_eq!(to_line(&record), "Defaults@host x=y,one=1,two=2");
    }

    #[test]
    fn test_alias_line() {
        let record = Record::alias(
            AliasKind::Cmnd,
            "ALIAS_NAME",
            strings(&["/bin/true", "/usr/bin/su - bob"]),
        );
        assert_eq!(
            to_line(&record),
            "Cmnd_Alias ALIAS_NAME=/bin/true,/usr/bin/su - bob"
        );
    }

    #[test]
    fn test_named_user_spec_gets_marker() {
        let record = Record::user_spec(
            strings(&["dan1", "dan2"]),
            strings(&["ALL"]),
            strings(&[
                "(root) /usr/bin/su - easapp",
                "(easapp)/usr/local/eas-ts/bin/appctl",
            ]),
        )
        .with_name("NAME");
        assert_eq!(
            to_lines(&record),
            vec![
                "# Puppet NAMEVAR NAME".to_string(),
                "dan1,dan2 ALL=(root) /usr/bin/su - easapp,(easapp)/usr/local/eas-ts/bin/appctl"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_synthetic_user_spec_has_no_marker() {
        let record = Record::user_spec(strings(&["x"]), strings(&["y"]), strings(&["z"]))
            .with_name("fake_namevar_3");
        assert_eq!(to_lines(&record), vec!["x y=z".to_string()]);
    }

    #[test]
    fn test_comment_is_written_verbatim() {
        assert_eq!(to_line(&Record::comment(" something!!")), "# something!!");
        assert_eq!(to_line(&Record::comment("includedir /etc/sudoers.d")), "#includedir /etc/sudoers.d");
        assert_eq!(to_line(&Record::comment("")), "#");
    }

    #[test]
    fn test_record_comment_precedes_marker() {
        let record = Record::user_spec(strings(&["ops"]), strings(&["ALL"]), strings(&["ALL"]))
            .with_name("ops_all")
            .with_comment("operators");
        assert_eq!(
            to_lines(&record),
            vec![
                "# operators".to_string(),
                "# Puppet NAMEVAR ops_all".to_string(),
                "ops ALL=ALL".to_string(),
            ]
        );
    }

    #[test]
    fn test_absent_record_is_omitted() {
        let record = Record::defaults("Defaults", strings(&["env_reset"])).with_ensure(Ensure::Absent);
        assert!(to_lines(&record).is_empty());
        assert_eq!(render(&[record]), "");
    }

    #[test]
    fn test_render_terminates_every_line() {
        let records = vec![
            Record::comment(" header"),
            Record::defaults("Defaults", strings(&["env_reset"])),
        ];
        assert_eq!(render(&records), "# header\nDefaults env_reset\n");
    }
}
