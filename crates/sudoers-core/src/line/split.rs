//! Top-level list splitting
//!
//! Every list in the format is comma separated, but commas inside a run-as
//! group `(root, admin)`, inside a double-quoted string, or escaped as `\,`
//! belong to the entry.

use crate::errors::{Result, SudoersError};

/// Split `segment` on top-level commas, trimming each entry
///
/// `field` and `line` are only used to build the error for an empty entry.
pub fn split_list(segment: &str, field: &'static str, line: &str) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escaped = false;

    for c in segment.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                current.push(c);
                escaped = true;
            }
            '"' => {
                current.push(c);
                in_quotes = !in_quotes;
            }
            '(' if !in_quotes => {
                current.push(c);
                depth += 1;
            }
            ')' if !in_quotes => {
                current.push(c);
                depth = depth.saturating_sub(1);
            }
            ',' if !in_quotes && depth == 0 => {
                entries.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    entries.push(current);

    entries
        .into_iter()
        .map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                Err(SudoersError::EmptyListItem {
                    line_no: None,
                    line: line.to_string(),
                    field,
                })
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

/// Remove whitespace around top-level commas so `a, b` reads as one token
pub fn tighten_commas(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            let mut run = String::from(c);
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    run.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            let before_comma = chars.peek() == Some(&',');
            let after_comma = out.ends_with(',');
            if !before_comma && !after_comma {
                out.push_str(&run);
            }
        } else {
            out.push(c);
        }
    }
    out
}
