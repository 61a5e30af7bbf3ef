//! Comments attached to clauses.

use chrono::Utc;
use cleardraft_core::{Annotation, new_id};
use tracing::debug;

use crate::StoreError;

/// Annotations in insertion order. Never pruned when clauses are deleted.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new, unresolved comment to `clause_id`.
    ///
    /// The clause is not checked for existence.
    pub fn add(
        &mut self,
        clause_id: &str,
        text: &str,
        author: &str,
    ) -> Result<Annotation, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::BlankAnnotation);
        }
        let annotation = Annotation {
            id: new_id("a"),
            clause_id: clause_id.to_string(),
            text: text.to_string(),
            author: author.to_string(),
            timestamp: Utc::now(),
            resolved: false,
        };
        debug!(annotation_id = %annotation.id, clause_id, "annotation added");
        self.annotations.push(annotation.clone());
        Ok(annotation)
    }

    /// Flip `resolved` on annotation `id`, returning the new state.
    pub fn toggle_resolved(&mut self, id: &str) -> Option<bool> {
        let annotation = self.annotations.iter_mut().find(|a| a.id == id)?;
        annotation.resolved = !annotation.resolved;
        debug!(annotation_id = %id, resolved = annotation.resolved, "annotation toggled");
        Some(annotation.resolved)
    }

    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Annotations on `clause_id`, oldest first.
    pub fn list_for(&self, clause_id: &str) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.clause_id == clause_id)
            .collect()
    }

    pub fn unresolved_for(&self, clause_id: &str) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.clause_id == clause_id && !a.resolved)
            .collect()
    }

    pub fn has_annotations(&self, clause_id: &str) -> bool {
        self.annotations.iter().any(|a| a.clause_id == clause_id)
    }

    pub fn all(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
