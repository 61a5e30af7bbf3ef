//! Append-only version history.

use cleardraft_core::{Clause, DocumentVersion};

/// Ordered snapshots, oldest first. Never empty: construction requires a
/// baseline, and entries are only ever appended.
#[derive(Debug, Clone)]
pub struct VersionArchive {
    versions: Vec<DocumentVersion>,
}

impl VersionArchive {
    /// Start a history whose first entry snapshots `clauses`.
    pub fn with_baseline(clauses: &[Clause], summary: &str, author: &str) -> Self {
        Self::from_baseline(DocumentVersion::snapshot(clauses, summary, author))
    }

    pub fn from_baseline(baseline: DocumentVersion) -> Self {
        Self {
            versions: vec![baseline],
        }
    }

    /// The most recent version.
    pub fn current(&self) -> &DocumentVersion {
        // Non-empty from construction onward.
        &self.versions[self.versions.len() - 1]
    }

    pub fn get(&self, id: &str) -> Option<&DocumentVersion> {
        self.versions.iter().find(|v| v.id() == id)
    }

    pub fn versions(&self) -> &[DocumentVersion] {
        &self.versions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentVersion> {
        self.versions.iter()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append `version` as the new current entry and return it.
    ///
    /// A timestamp earlier than the current entry's is raised to match it so
    /// history stays in ascending time order.
    pub fn append(&mut self, version: DocumentVersion) -> &DocumentVersion {
        let floor = self.current().timestamp();
        let version = if version.timestamp() < floor {
            version.restamped(floor)
        } else {
            version
        };
        self.versions.push(version);
        self.current()
    }
}

impl<'a> IntoIterator for &'a VersionArchive {
    type Item = &'a DocumentVersion;
    type IntoIter = std::slice::Iter<'a, DocumentVersion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
