use sudoers_core_types::RecordKind;

use crate::errors::{Result, SudoersError};
use crate::line::{parse_line, render};
use crate::model::Record;
use crate::resolver::resolve;

/// The resolved records of one target file, in file order
///
/// Absent records stay in the list until the document is rendered, so a
/// removal never changes the position of anything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    target: String,
    records: Vec<Record>,
}

impl Document {
    /// Create an empty document for `target`
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            records: Vec::new(),
        }
    }

    /// Parse and resolve the text of `target`
    ///
    /// Blank lines are skipped. Every record is stamped with `target`.
    ///
    /// # Errors
    ///
    /// Returns the first parse error, tagged with its 1-based line number.
    /// Nothing is skipped: record positions drive identity resolution.
    pub fn parse(target: impl Into<String>, text: &str) -> Result<Self> {
        let target = target.into();
        let mut parsed = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_line(line).map_err(|e| e.at_line(index + 1))?;
            parsed.push(record.with_target(target.clone()));
        }
        tracing::debug!(target_path = %target, parsed = parsed.len(), "parsed target text");

        Ok(Self {
            records: resolve(parsed),
            target,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// All records, absent ones included
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Records that will be written
    pub fn present_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.is_present())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a present record by kind and name
    pub fn find(&self, kind: RecordKind, name: &str) -> Option<&Record> {
        self.position(kind, name).map(|i| &self.records[i])
    }

    /// Index of a present record by kind and name
    pub fn position(&self, kind: RecordKind, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.is_present() && r.kind() == kind && r.name == name)
    }

    /// Append a record after all existing ones, stamping the target
    pub fn push(&mut self, record: Record) {
        let record = match record.target {
            Some(_) => record,
            None => record.with_target(self.target.clone()),
        };
        self.records.push(record);
    }

    /// Replace the record at `index`, stamping the target
    ///
    /// # Errors
    ///
    /// Returns `Internal` if `index` is out of range.
    pub fn replace(&mut self, index: usize, record: Record) -> Result<()> {
        let target = self.target.clone();
        let slot = self
            .records
            .get_mut(index)
            .ok_or_else(|| SudoersError::Internal {
                message: format!("record index {} out of range", index),
            })?;
        *slot = record.with_target(target);
        Ok(())
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Serialize the present records
    pub fn render(&self) -> String {
        render(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# header

Defaults env_reset
# Puppet NAMEVAR admins
%admin ALL=(ALL) ALL
root ALL=(ALL:ALL) ALL
";

    #[test]
    fn test_parse_skips_blank_lines_and_resolves() {
        let doc = Document::parse("/etc/sudoers", SAMPLE).unwrap();
        let names: Vec<_> = doc.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["", "Defaults", "admins", "fake_namevar_0"]);
        assert!(doc
            .records()
            .iter()
            .all(|r| r.target() == Some("/etc/sudoers")));
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let err = Document::parse("t", "Defaults env_reset\n\nx = y\n").unwrap_err();
        assert_eq!(
            err,
            SudoersError::MissingHosts {
                line_no: Some(3),
                line: "x = y".to_string(),
            }
        );
    }

    #[test]
    fn test_render_is_canonical() {
        let doc = Document::parse("t", SAMPLE).unwrap();
        assert_eq!(
            doc.render(),
            "# header\nDefaults env_reset\n# Puppet NAMEVAR admins\n%admin ALL=(ALL) ALL\nroot ALL=(ALL:ALL) ALL\n"
        );
    }

    #[test]
    fn test_find_by_kind_and_name() {
        let doc = Document::parse("t", SAMPLE).unwrap();
        assert!(doc.find(RecordKind::UserSpec, "admins").is_some());
        assert!(doc.find(RecordKind::Alias, "admins").is_none());
        assert_eq!(doc.position(RecordKind::Default, "Defaults"), Some(1));
    }

    #[test]
    fn test_push_stamps_target() {
        let mut doc = Document::new("/etc/sudoers");
        doc.push(Record::comment(" added"));
        assert_eq!(doc.records()[0].target(), Some("/etc/sudoers"));
    }
}
