//! User spec identity resolution.
//!
//! Nothing in a user spec line names it, so names come from the line before
//! it: a `# Puppet NAMEVAR <name>` marker. Rules without a marker get
//! `fake_namevar_<n>`, numbered in file order.
//!
//! The pass is position dependent and must see records in file order.

use crate::model::{Record, RecordBody, SYNTHETIC_NAME_PREFIX};

/// Forward-pass state for one target file.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    pending_declared_name: Option<String>,
    fallback_counter: u64,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next record in file order.
    ///
    /// Returns `None` for marker comments, which are consumed as the name of
    /// the record that follows them.
    pub fn accept(&mut self, mut record: Record) -> Option<Record> {
        if let Some(name) = record.declared_name() {
            if let Some(dropped) = self.pending_declared_name.replace(name.to_string()) {
                tracing::debug!(dropped = %dropped, "marker superseded by a later marker");
            }
            return None;
        }

        if let RecordBody::UserSpec { .. } = record.body {
            record.name = match self.pending_declared_name.take() {
                Some(name) => name,
                None => self.next_synthetic_name(),
            };
        } else if let Some(dropped) = self.pending_declared_name.take() {
            tracing::debug!(
                dropped = %dropped,
                kind = %record.kind(),
                "marker not followed by a user spec"
            );
        }

        Some(record)
    }

    /// End of input; a marker still pending has nothing to name.
    pub fn finish(self) {
        if let Some(dropped) = self.pending_declared_name {
            tracing::debug!(dropped = %dropped, "marker at end of file");
        }
    }

    fn next_synthetic_name(&mut self) -> String {
        let name = format!("{}{}", SYNTHETIC_NAME_PREFIX, self.fallback_counter);
        self.fallback_counter += 1;
        name
    }
}

/// Resolve one file's records, in order.
///
/// Consumed markers are removed from the output; everything else is kept
/// in its original position.
pub fn resolve<I>(records: I) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    let mut resolver = IdentityResolver::new();
    let resolved = records
        .into_iter()
        .filter_map(|record| resolver.accept(record))
        .collect();
    resolver.finish();
    resolved
}
