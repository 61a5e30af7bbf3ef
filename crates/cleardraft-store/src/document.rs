//! The live clause sequence being edited.
//!
//! Edits apply directly with no validation gate; structural checks only run
//! when a version is saved. `locked` is carried as advisory metadata and not
//! enforced here.

use cleardraft_core::{Clause, ClauseType, NEW_CLAUSE_LABEL, new_id, numbering};
use tracing::debug;

use crate::StoreError;

/// Ordered, exclusively-owned sequence of clauses.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    clauses: Vec<Clause>,
}

impl DocumentStore {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn get(&self, id: &str) -> Option<&Clause> {
        self.clauses.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Insert a new clause after `after_id`, or at the end when `after_id` is
    /// `None` or not present. Returns the generated id.
    ///
    /// The new clause is labelled [`NEW_CLAUSE_LABEL`]; no other clause's
    /// numbering changes.
    pub fn insert_clause(
        &mut self,
        after_id: Option<&str>,
        kind: ClauseType,
        content: impl Into<String>,
    ) -> String {
        let clause = Clause::new(new_id("c"), kind, content).with_numbering(NEW_CLAUSE_LABEL);
        let id = clause.id.clone();

        let position = after_id
            .and_then(|after| self.position(after))
            .map(|idx| idx + 1)
            .unwrap_or(self.clauses.len());
        self.clauses.insert(position, clause);

        debug!(clause_id = %id, position, %kind, "clause inserted");
        id
    }

    /// Replace the content of clause `id`.
    pub fn update_content(&mut self, id: &str, content: impl Into<String>) -> Result<(), StoreError> {
        let clause = self
            .clauses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::ClauseNotFound(id.to_string()))?;
        clause.content = content.into();
        debug!(clause_id = %id, "clause content updated");
        Ok(())
    }

    /// Remove clause `id`, returning it. Absent ids are ignored.
    ///
    /// Annotations referencing the clause are left untouched.
    pub fn delete_clause(&mut self, id: &str) -> Option<Clause> {
        let idx = self.position(id)?;
        let removed = self.clauses.remove(idx);
        debug!(clause_id = %id, locked = removed.locked, "clause deleted");
        Some(removed)
    }

    /// Swap in a whole new clause sequence (version restore).
    pub fn replace_all(&mut self, clauses: Vec<Clause>) {
        debug!(count = clauses.len(), "document replaced");
        self.clauses = clauses;
    }

    /// Rebuild every numbering label from document order.
    ///
    /// Returns how many labels changed.
    pub fn renumber(&mut self) -> usize {
        numbering::renumber(&mut self.clauses)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.clauses.iter().position(|c| c.id == id)
    }
}
