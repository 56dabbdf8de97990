use once_cell::sync::Lazy;
use regex::Regex;
use sudoers_core_types::RecordKind;

use crate::errors::{Result, SudoersError};
use crate::line::{is_marker_text, parse_line, to_lines};
use crate::model::{is_synthetic_name, Record, RecordBody};

/// User name that would make a user spec read as a Defaults line
pub const RESERVED_USER: &str = "Defaults";

static ALIAS_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("alias name regex is valid"));

static DEFAULTS_SCOPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Defaults(?:[@:>!]\S+)?$").expect("defaults scope regex is valid"));

/// Validate a desired record before it is written
///
/// Parsed records are not run through this: the parser already guarantees
/// their shape, and a file read must not fail on content it can round-trip.
/// Absent records pass unchecked.
///
/// Checks, by kind:
/// 1. Default - parameters present, name is a Defaults scope prefix
/// 2. Alias - items present, name matches `[A-Z][A-Z0-9_]*`
/// 3. UserSpec - users, hosts and commands present, no user named `Defaults`,
///    name not of the reserved `fake_namevar_<n>` form
/// 4. Comment - text is not itself a name marker
///
/// Finally the record's own line is serialized and parsed again; any entry
/// that would read back differently (embedded whitespace or `=` in a user or
/// host, an unbalanced `(` or quote that swallows a comma, a leading `#`)
/// is rejected, so nothing that passes here can corrupt the file.
///
/// # Errors
/// Returns the first violation found.
pub fn validate(record: &Record) -> Result<()> {
    if !record.is_present() {
        return Ok(());
    }

    single_line(&record.name, "name")?;
    single_line(&record.comment, "comment")?;
    if record.kind() != RecordKind::Comment && is_marker_text(&record.comment) {
        return Err(SudoersError::MarkerInComment {
            text: record.comment.clone(),
        });
    }

    match &record.body {
        RecordBody::Default { parameters } => {
            require(parameters, "parameters", RecordKind::Default)?;
            if !DEFAULTS_SCOPE_REGEX.is_match(&record.name) {
                return Err(SudoersError::InvalidDefaultsScope {
                    name: record.name.clone(),
                });
            }
        }
        RecordBody::Alias { items, .. } => {
            require(items, "items", RecordKind::Alias)?;
            validate_alias_name(&record.name)?;
        }
        RecordBody::UserSpec {
            users,
            hosts,
            commands,
        } => {
            require(users, "users", RecordKind::UserSpec)?;
            require(hosts, "hosts", RecordKind::UserSpec)?;
            require(commands, "commands", RecordKind::UserSpec)?;
            validate_users(users)?;
            validate_user_spec_name(&record.name)?;
        }
        RecordBody::Comment { declared_name } => {
            if declared_name.is_none() && is_marker_text(&record.comment) {
                return Err(SudoersError::MarkerInComment {
                    text: record.comment.clone(),
                });
            }
        }
    }

    reads_back(record)
}

/// Serialize the record's own line and check it parses to the same fields
fn reads_back(record: &Record) -> Result<()> {
    // Markers are written by the serializer itself
    if record.declared_name().is_some() {
        return Ok(());
    }

    let own_line = match record.body {
        RecordBody::Comment { .. } => record.clone(),
        _ => record.clone().with_comment(""),
    };
    let line = to_lines(&own_line).pop().unwrap_or_default();
    let unreadable = || SudoersError::UnreadableLine {
        kind: record.kind(),
        line: line.clone(),
    };

    let parsed = parse_line(&line).map_err(|_| unreadable())?;
    let same_name = match record.body {
        RecordBody::Default { .. } | RecordBody::Alias { .. } => parsed.name == record.name,
        RecordBody::UserSpec { .. } => true,
        RecordBody::Comment { .. } => parsed.comment == record.comment,
    };
    if !same_name || parsed.body != record.body {
        return Err(unreadable());
    }
    Ok(())
}

/// `^[A-Z][A-Z0-9_]*$`
pub fn validate_alias_name(name: &str) -> Result<()> {
    if ALIAS_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(SudoersError::InvalidAliasName {
            name: name.to_string(),
        })
    }
}

/// Reject the reserved `Defaults` user
pub fn validate_users(users: &[String]) -> Result<()> {
    if users.iter().any(|u| u == RESERVED_USER) {
        return Err(SudoersError::ReservedUser);
    }
    Ok(())
}

/// A user-declared name must be non-empty, a single token, and not synthetic
pub fn validate_user_spec_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SudoersError::MissingAttribute {
            attribute: "name",
            kind: RecordKind::UserSpec,
        });
    }
    if is_synthetic_name(name) || name.contains(char::is_whitespace) {
        return Err(SudoersError::ReservedName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn require(values: &[String], attribute: &'static str, kind: RecordKind) -> Result<()> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        return Err(SudoersError::MissingAttribute { attribute, kind });
    }
    values.iter().try_for_each(|v| single_line(v, attribute))
}

// One physical line per record; continuation lines are not supported
fn single_line(value: &str, attribute: &'static str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(SudoersError::MultiLineValue { attribute });
    }
    Ok(())
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
    fn test_valid_records_pass() {
        assert!(validate(&Record::defaults("Defaults:ops", strings(&["!lecture"]))).is_ok());
        assert!(validate(&Record::alias(AliasKind::Host, "WEB_1", strings(&["web1"]))).is_ok());
        let spec = Record::user_spec(strings(&["ops"]), strings(&["ALL"]), strings(&["ALL"]))
            .with_name("ops");
        assert!(validate(&spec).is_ok());
        assert!(validate(&Record::comment(" plain")).is_ok());
    }

    #[test]
    fn test_alias_name_pattern() {
        let err = validate(&Record::alias(AliasKind::Cmnd, "type", strings(&["items"])))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "alias names type does not match [A-Z]([A-Z][0-9]_)*"
        );
        assert!(validate_alias_name("_X").is_err());
        assert!(validate_alias_name("9X").is_err());
    }

    #[test]
    fn test_missing_attribute_messages() {
        let err = validate(&Record::alias(AliasKind::Cmnd, "SUDO", vec![])).unwrap_err();
        assert_eq!(err.to_string(), "missing attribute items for type alias");

        let spec = Record::user_spec(strings(&["users"]), vec![], strings(&["commands"]))
            .with_name("hosts");
        let err = validate(&spec).unwrap_err();
        assert_eq!(err.to_string(), "missing attribute hosts for type user_spec");

        let err = validate(&Record::defaults("Defaults", vec![])).unwrap_err();
        assert_eq!(err.to_string(), "missing attribute parameters for type default");
    }

    #[test]
    fn test_defaults_user_is_reserved() {
        let spec = Record::user_spec(strings(&["Defaults"]), strings(&["ALL"]), strings(&["ALL"]))
            .with_name("defaults");
        let err = validate(&spec).unwrap_err();
        assert_eq!(err.to_string(), "Cannot specify user named Defaults in sudoers");
    }

    #[test]
    fn test_synthetic_names_are_reserved() {
        let spec = Record::user_spec(strings(&["a"]), strings(&["b"]), strings(&["c"]))
            .with_name("fake_namevar_0");
        assert_eq!(
            validate(&spec).unwrap_err(),
            SudoersError::ReservedName {
                name: "fake_namevar_0".to_string()
            }
        );
    }

    #[test]
    fn test_defaults_scope_must_be_prefix() {
        let err = validate(&Record::defaults("Default", strings(&["x"]))).unwrap_err();
        assert!(matches!(err, SudoersError::InvalidDefaultsScope { .. }));
    }

    #[test]
    fn test_comment_cannot_impersonate_marker() {
        let err = validate(&Record::comment(" Puppet NAMEVAR sneaky")).unwrap_err();
        assert!(matches!(err, SudoersError::MarkerInComment { .. }));
    }

    #[test]
    fn test_values_must_fit_on_one_line() {
        let record = Record::defaults("Defaults", strings(&["env_reset\nroot ALL=ALL"]));
        assert_eq!(
            validate(&record).unwrap_err(),
            SudoersError::MultiLineValue {
                attribute: "parameters"
            }
        );
        let record = Record::comment(" two\nlines");
        assert!(validate(&record).is_err());
    }

    #[test]
    fn test_user_and_host_entries_must_read_back() {
        let cases = [
            (strings(&["alice bob"]), strings(&["ALL"])),
            (strings(&["a=b"]), strings(&["ALL"])),
            (strings(&["#ops"]), strings(&["ALL"])),
            (strings(&["Cmnd_Alias"]), strings(&["ALL"])),
            (strings(&["(ops", "dev)"]), strings(&["ALL"])),
            (strings(&["ops"]), strings(&["web 1"])),
            (strings(&["ops"]), strings(&["web=1"])),
        ];
        for (users, hosts) in cases {
            let spec = Record::user_spec(users.clone(), hosts, strings(&["ALL"])).with_name("x");
            assert!(
                matches!(validate(&spec), Err(SudoersError::UnreadableLine { .. })),
                "accepted {:?}",
                users
            );
        }
    }

    #[test]
    fn test_list_entries_cannot_hide_commas() {
        let spec = Record::user_spec(strings(&["ops"]), strings(&["ALL"]), strings(&["/bin/a,/bin/b"]))
            .with_name("x");
        assert_eq!(
            validate(&spec).unwrap_err(),
            SudoersError::UnreadableLine {
                kind: RecordKind::UserSpec,
                line: "ops ALL=/bin/a,/bin/b".to_string(),
            }
        );

        let alias = Record::alias(AliasKind::Cmnd, "X", strings(&["\\", "/bin/sh"]));
        assert!(validate(&alias).is_err());

        let defaults = Record::defaults("Defaults", strings(&[" padded"]));
        assert!(validate(&defaults).is_err());
    }

    #[test]
    fn test_entries_that_survive_parsing_pass() {
        let spec = Record::user_spec(
            strings(&["%wheel", "alice"]),
            strings(&["ALL"]),
            strings(&["(root, admin) NOPASSWD: /bin/ls --color=auto", "/bin/cat"]),
        )
        .with_name("wheel");
        assert!(validate(&spec).is_ok());
        let defaults = Record::defaults("Defaults", strings(&[r#"env_keep+="A, B""#]));
        assert!(validate(&defaults).is_ok());
    }

    #[test]
    fn test_record_comment_cannot_be_marker() {
        let record = Record::defaults("Defaults", strings(&["env_reset"]))
            .with_comment("Puppet NAMEVAR hijack");
        assert!(matches!(
            validate(&record).unwrap_err(),
            SudoersError::MarkerInComment { .. }
        ));
    }

    #[test]
    fn test_absent_records_skip_field_checks() {
        let record = Record::alias(AliasKind::Cmnd, "X", vec![]).with_ensure(Ensure::Absent);
        assert!(validate(&record).is_ok());
    }
}
