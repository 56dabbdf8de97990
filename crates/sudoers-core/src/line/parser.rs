//! Line parser
//!
//! Grammars are tried in order and the first match wins:
//!
//! 1. comment - `#` followed by anything; a `Puppet NAMEVAR <name>` body is a marker
//! 2. default - `Defaults[@host|:users|>runas|!cmnd] p1,p2`
//! 3. alias - `<Kind>_Alias NAME = i1,i2`
//! 4. user spec - `users hosts=commands`, split on the first `=` only
//!
//! A line that starts with `Defaults` or an alias keyword but does not fit
//! that grammar is malformed; it never falls through to the user spec rule.

use once_cell::sync::Lazy;
use regex::Regex;

use super::split::{split_list, tighten_commas};
use crate::errors::{Result, SudoersError};
use crate::model::{AliasKind, Record};

/// Tag that starts a marker comment body
pub const MARKER_TAG: &str = "Puppet";

/// Literal word between the tag and the declared name
pub const MARKER_KEYWORD: &str = "NAMEVAR";

static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\s*{} {} (\S+)\s*$", MARKER_TAG, MARKER_KEYWORD))
        .expect("marker regex is valid")
});

static DEFAULTS_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Defaults(?:[@:>!]|\s|$)").expect("defaults word regex is valid"));

static DEFAULTS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<scope>Defaults(?:[@:>!]\S+)?)\s+(?P<params>\S.*)$")
        .expect("defaults regex is valid")
});

static ALIAS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<kind>Cmnd_Alias|Host_Alias|User_Alias|Runas_Alias)\s+(?P<name>[A-Z][A-Z0-9_]*)\s*=\s*(?P<items>\S.*)$",
    )
    .expect("alias regex is valid")
});

/// Parse one line into a record
///
/// Surrounding whitespace is ignored. Blank lines are not records and are
/// reported as malformed; callers skip them before parsing.
///
/// # Errors
///
/// Returns a parse error (`MalformedLine`, `MissingHosts` or
/// `EmptyListItem`) without a line number; callers that know the position
/// attach it with [`SudoersError::at_line`].
pub fn parse_line(text: &str) -> Result<Record> {
    let line = text.trim();

    if let Some(body) = line.strip_prefix('#') {
        return Ok(parse_comment(body));
    }

    if DEFAULTS_WORD_REGEX.is_match(line) {
        return parse_defaults(line);
    }

    let first_word = line.split_whitespace().next().unwrap_or_default();
    if AliasKind::from_keyword(first_word).is_some() {
        return parse_alias(line);
    }

    parse_user_spec(line)
}

/// Check whether a comment body is a name marker
pub fn is_marker_text(body: &str) -> bool {
    MARKER_REGEX.is_match(body)
}

fn parse_comment(body: &str) -> Record {
    match MARKER_REGEX.captures(body) {
        Some(caps) => Record::marker(&caps[1]),
        None => Record::comment(body),
    }
}

fn parse_defaults(line: &str) -> Result<Record> {
    let caps = DEFAULTS_REGEX.captures(line).ok_or_else(|| malformed(line))?;
    let parameters = split_list(&caps["params"], "parameters", line)?;
    Ok(Record::defaults(&caps["scope"], parameters))
}

fn parse_alias(line: &str) -> Result<Record> {
    let caps = ALIAS_REGEX.captures(line).ok_or_else(|| malformed(line))?;
    let alias_kind = AliasKind::from_keyword(&caps["kind"]).ok_or_else(|| malformed(line))?;
    let items = split_list(&caps["items"], "items", line)?;
    Ok(Record::alias(alias_kind, &caps["name"], items))
}

fn parse_user_spec(line: &str) -> Result<Record> {
    // Only the first `=` separates hosts from commands; later ones belong to a command
    let (head, commands) = line.split_once('=').ok_or_else(|| malformed(line))?;

    let head = tighten_commas(head.trim());
    let mut tokens = head.split_whitespace();
    let (users, hosts) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(users), Some(hosts), None) => (users, hosts),
        (Some(_), None, _) => {
            return Err(SudoersError::MissingHosts {
                line_no: None,
                line: line.to_string(),
            })
        }
        _ => return Err(malformed(line)),
    };

    let commands = commands.trim();
    if commands.is_empty() {
        return Err(malformed(line));
    }

    Ok(Record::user_spec(
        split_list(users, "users", line)?,
        split_list(hosts, "hosts", line)?,
        split_list(commands, "commands", line)?,
    ))
}

fn malformed(line: &str) -> SudoersError {
    SudoersError::MalformedLine {
        line_no: None,
        line: line.to_string(),
    }
}
