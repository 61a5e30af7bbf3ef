//! Contract document types shared by the stores, the AI layer and the CLI.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author label used when no user identity is configured.
pub const DEFAULT_AUTHOR: &str = "Current User";

/// Structural role of a clause within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClauseType {
    Heading,
    Paragraph,
    ListItem,
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Heading => "HEADING",
            Self::Paragraph => "PARAGRAPH",
            Self::ListItem => "LIST_ITEM",
        };
        f.write_str(label)
    }
}

/// One heading, paragraph, or list item of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ClauseType,
    pub content: String,
    /// Display label such as "2.1". Caller-supplied; never recomputed implicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbering: Option<String>,
    /// Advisory: the editor should warn before deleting a locked clause.
    #[serde(default)]
    pub locked: bool,
}

impl Clause {
    pub fn new(id: impl Into<String>, kind: ClauseType, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
            numbering: None,
            locked: false,
        }
    }

    pub fn with_numbering(mut self, numbering: impl Into<String>) -> Self {
        self.numbering = Some(numbering.into());
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// A comment attached to a clause.
///
/// `clause_id` is a plain reference: deleting the clause leaves the annotation
/// in place as an orphan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    pub clause_id: String,
    pub text: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}

/// An immutable snapshot of the whole clause sequence.
///
/// The clauses are an owned copy taken at construction time, so later edits
/// to the live document can never reach a stored version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVersion {
    id: String,
    timestamp: DateTime<Utc>,
    clauses: Vec<Clause>,
    summary: String,
    author: String,
}

impl DocumentVersion {
    /// Snapshot `clauses` now, under a fresh `v-` id.
    pub fn snapshot(clauses: &[Clause], summary: impl Into<String>, author: impl Into<String>) -> Self {
        Self::at(Utc::now(), clauses, summary, author)
    }

    /// Snapshot `clauses` with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Utc>,
        clauses: &[Clause],
        summary: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id("v"),
            timestamp,
            clauses: clauses.to_vec(),
            summary: summary.into(),
            author: author.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Same snapshot with its timestamp moved to `timestamp`. Used by the
    /// archive to keep history ordered when the wall clock steps backwards.
    pub fn restamped(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Outcome of structural validation. Valid iff `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("document failed validation: {}", .errors.join(" "))]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Id-based comparison of two clause sequences.
///
/// Counts clauses whose id appears only in `new` (added), only in `old`
/// (removed), or in both with different content, type or numbering (modified).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeStats {
    pub old_len: usize,
    pub new_len: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl ChangeStats {
    pub fn between(old: &[Clause], new: &[Clause]) -> Self {
        let before: HashMap<&str, &Clause> = old.iter().map(|c| (c.id.as_str(), c)).collect();
        let after: HashMap<&str, &Clause> = new.iter().map(|c| (c.id.as_str(), c)).collect();

        let mut stats = Self {
            old_len: old.len(),
            new_len: new.len(),
            ..Self::default()
        };
        for (id, clause) in &after {
            match before.get(id) {
                None => stats.added += 1,
                Some(prev) if *prev != *clause => stats.modified += 1,
                Some(_) => {}
            }
        }
        stats.removed = before.keys().filter(|id| !after.contains_key(*id)).count();
        stats
    }

    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

/// Generate an opaque id such as `c-7f0c…` with the given prefix.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
