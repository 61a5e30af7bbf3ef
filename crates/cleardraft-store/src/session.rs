//! One editing session: the live document, its comments, its history, and
//! the text services used to summarize and critique it.
//!
//! Everything a user action touches is owned here and reached through
//! `&mut Session`, so at most one save can be in flight per session.

use std::sync::Arc;

use cleardraft_core::seed::BASELINE_SUMMARY;
use cleardraft_core::{
    Annotation, ChangeSummarizer, ClauseAnalyzer, Clause, ClauseType, DEFAULT_AUTHOR,
    DocumentVersion, ValidationResult,
};
use tracing::info;

use crate::pipeline;
use crate::{AnnotationStore, DocumentStore, StoreError, VersionArchive};

/// What restoring a version does to the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestorePolicy {
    /// Replace the live document; the archive is unchanged and the discarded
    /// live state is not recorded.
    #[default]
    Discard,
    /// Replace the live document and append a "Reverted to version …" entry.
    Record,
}

pub struct Session {
    document: DocumentStore,
    annotations: AnnotationStore,
    archive: VersionArchive,
    selected: Option<String>,
    last_validation: Option<ValidationResult>,
    author: String,
    restore_policy: RestorePolicy,
    summarizer: Arc<dyn ChangeSummarizer>,
    analyzer: Arc<dyn ClauseAnalyzer>,
}

impl Session {
    /// Open a session on `clauses`, recording them as the baseline version.
    pub fn new(
        clauses: Vec<Clause>,
        summarizer: Arc<dyn ChangeSummarizer>,
        analyzer: Arc<dyn ClauseAnalyzer>,
    ) -> Self {
        let archive = VersionArchive::with_baseline(&clauses, BASELINE_SUMMARY, DEFAULT_AUTHOR);
        info!(
            clauses = clauses.len(),
            baseline = %archive.current().id(),
            "session opened"
        );
        Self {
            document: DocumentStore::new(clauses),
            annotations: AnnotationStore::new(),
            archive,
            selected: None,
            last_validation: None,
            author: DEFAULT_AUTHOR.to_string(),
            restore_policy: RestorePolicy::default(),
            summarizer,
            analyzer,
        }
    }

    /// Attribute new annotations and versions to `author`.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_restore_policy(mut self, policy: RestorePolicy) -> Self {
        self.restore_policy = policy;
        self
    }

    pub fn document(&self) -> &DocumentStore {
        &self.document
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    pub fn archive(&self) -> &VersionArchive {
        &self.archive
    }

    pub fn current_version(&self) -> &DocumentVersion {
        self.archive.current()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Errors from the most recent save that failed validation, cleared by
    /// the next successful save.
    pub fn last_validation(&self) -> Option<&ValidationResult> {
        self.last_validation.as_ref()
    }

    // ── Selection ──

    pub fn select(&mut self, clause_id: &str) -> Result<(), StoreError> {
        if self.document.get(clause_id).is_none() {
            return Err(StoreError::ClauseNotFound(clause_id.to_string()));
        }
        self.selected = Some(clause_id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Clause> {
        self.selected.as_deref().and_then(|id| self.document.get(id))
    }

    // ── Document edits ──

    /// Insert a clause after the selected one (or at the end) and select it.
    pub fn add_clause(&mut self, kind: ClauseType, content: impl Into<String>) -> String {
        let id = self
            .document
            .insert_clause(self.selected.as_deref(), kind, content);
        self.selected = Some(id.clone());
        id
    }

    pub fn update_clause(&mut self, id: &str, content: impl Into<String>) -> Result<(), StoreError> {
        self.document.update_content(id, content)
    }

    pub fn delete_clause(&mut self, id: &str) -> Option<Clause> {
        let removed = self.document.delete_clause(id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(removed)
    }

    /// Replace the live clauses without touching history, as when the editor
    /// opens a draft on top of the baseline. The selection is cleared.
    pub fn load_document(&mut self, clauses: Vec<Clause>) {
        self.document.replace_all(clauses);
        self.selected = None;
    }

    pub fn renumber(&mut self) -> usize {
        self.document.renumber()
    }

    // ── Annotations ──

    /// Comment on the selected clause.
    pub fn add_annotation(&mut self, text: &str) -> Result<Annotation, StoreError> {
        let clause_id = self.selected.clone().ok_or(StoreError::NoClauseSelected)?;
        self.annotations.add(&clause_id, text, &self.author)
    }

    pub fn toggle_annotation(&mut self, id: &str) -> Option<bool> {
        self.annotations.toggle_resolved(id)
    }

    // ── History ──

    /// Validate and snapshot the live document.
    pub async fn save_version(&mut self) -> Result<DocumentVersion, ValidationResult> {
        let result = pipeline::save_version(
            self.document.clauses(),
            &mut self.archive,
            self.summarizer.as_ref(),
            &self.author,
        )
        .await;
        self.last_validation = result.as_ref().err().cloned();
        result
    }

    /// Make version `version_id` the live document.
    pub fn restore_version(&mut self, version_id: &str) -> Result<(), StoreError> {
        let clauses = pipeline::restore_version(&self.archive, version_id)?;
        if self.restore_policy == RestorePolicy::Record {
            let summary = format!("Reverted to version {version_id}");
            self.archive
                .append(DocumentVersion::snapshot(&clauses, summary, &self.author));
        }
        self.document.replace_all(clauses);
        if let Some(id) = self.selected.as_deref()
            && self.document.get(id).is_none()
        {
            self.selected = None;
        }
        info!(
            version_id,
            policy = ?self.restore_policy,
            history = self.archive.len(),
            "version restored"
        );
        Ok(())
    }

    // ── AI ──

    /// Ask the analyzer for a critique of clause `id`.
    pub async fn analyze_clause(&self, id: &str) -> Result<String, StoreError> {
        let clause = self
            .document
            .get(id)
            .ok_or_else(|| StoreError::ClauseNotFound(id.to_string()))?;
        Ok(self.analyzer.analyze_clause_text(&clause.content).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cleardraft_core::seed::initial_clauses;

    struct FixedText;

    #[async_trait]
    impl ChangeSummarizer for FixedText {
        async fn summarize_changes(&self, _old: &[Clause], _new: &[Clause]) -> String {
            "Edited clauses.".to_string()
        }
    }

    #[async_trait]
    impl ClauseAnalyzer for FixedText {
        async fn analyze_clause_text(&self, text: &str) -> String {
            format!("{} words", text.split_whitespace().count())
        }
    }

    fn session_on(clauses: Vec<Clause>) -> Session {
        Session::new(clauses, Arc::new(FixedText), Arc::new(FixedText))
    }

    #[test]
    fn new_session_has_baseline() {
        let session = session_on(initial_clauses());
        assert_eq!(session.archive().len(), 1);
        assert_eq!(session.current_version().summary(), BASELINE_SUMMARY);
        assert_eq!(session.current_version().clauses(), session.document().clauses());
    }

    #[test]
    fn add_clause_follows_selection() {
        let mut session = session_on(initial_clauses());
        session.select("c-3").unwrap();
        let id = session.add_clause(ClauseType::Paragraph, "");
        assert_eq!(session.document().clauses()[3].id, id);
        assert_eq!(session.selected().map(|c| c.id.as_str()), Some(id.as_str()));

        session.clear_selection();
        let tail = session.add_clause(ClauseType::ListItem, "Schedule A");
        assert_eq!(session.document().clauses().last().unwrap().id, tail);
    }

    #[test]
    fn select_unknown_clause_fails() {
        let mut session = session_on(initial_clauses());
        assert_eq!(
            session.select("c-404"),
            Err(StoreError::ClauseNotFound("c-404".into()))
        );
        assert!(session.selected().is_none());
    }

    #[test]
    fn annotation_requires_selection() {
        let mut session = session_on(initial_clauses());
        assert_eq!(
            session.add_annotation("Clarify term."),
            Err(StoreError::NoClauseSelected)
        );

        session.select("c-4").unwrap();
        let ann = session.add_annotation("Clarify term.").unwrap();
        assert_eq!(ann.clause_id, "c-4");
        assert_eq!(ann.author, DEFAULT_AUTHOR);
        assert_eq!(session.toggle_annotation(&ann.id), Some(true));
    }

    #[test]
    fn deleting_clause_keeps_annotations_and_clears_selection() {
        let mut session = session_on(initial_clauses()).with_author("Counsel");
        session.select("c-5").unwrap();
        session.add_annotation("Too broad.").unwrap();

        assert!(session.delete_clause("c-5").is_some());
        assert!(session.selected().is_none());
        let orphans = session.annotations().list_for("c-5");
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].author, "Counsel");
    }

    #[tokio::test]
    async fn loaded_draft_is_compared_against_baseline() {
        let mut session = session_on(initial_clauses());
        session.select("c-1").unwrap();
        session.load_document(vec![Clause::new("d-1", ClauseType::Heading, "NDA")]);
        assert!(session.selected().is_none());
        assert_eq!(session.archive().len(), 1);

        let saved = session.save_version().await.unwrap();
        assert_eq!(saved.clauses()[0].id, "d-1");
        assert_eq!(session.archive().versions()[0].clauses().len(), 5);
    }

    #[tokio::test]
    async fn edits_after_save_do_not_reach_history() {
        let mut session = session_on(initial_clauses());
        session.update_clause("c-4", "Twenty-four months.").unwrap();
        let saved = session.save_version().await.unwrap();
        assert_eq!(saved.summary(), "Edited clauses.");

        session.update_clause("c-4", "Thirty-six months.").unwrap();
        let stored = session.archive().get(saved.id()).unwrap();
        assert_eq!(stored.clauses()[3].content, "Twenty-four months.");
        assert_eq!(session.archive().len(), 2);
    }

    #[tokio::test]
    async fn emptied_heading_blocks_save() {
        let mut session = session_on(vec![Clause::new("c-1", ClauseType::Heading, "MSA")]);
        session.update_clause("c-1", "").unwrap();

        let err = session.save_version().await.unwrap_err();
        assert!(!err.is_valid());
        assert!(err.errors.iter().any(|e| e.contains("Heading cannot be empty")));
        assert_eq!(session.archive().len(), 1);
        assert_eq!(session.last_validation(), Some(&err));

        session.update_clause("c-1", "MSA").unwrap();
        session.save_version().await.unwrap();
        assert!(session.last_validation().is_none());
    }

    #[tokio::test]
    async fn emptied_document_blocks_save() {
        let mut session = session_on(initial_clauses());
        for id in ["c-1", "c-2", "c-3", "c-4", "c-5"] {
            session.delete_clause(id);
        }
        assert!(session.save_version().await.is_err());
        assert_eq!(session.archive().len(), 1);
    }

    #[tokio::test]
    async fn restore_replaces_without_appending() {
        let mut session = session_on(initial_clauses());
        let baseline = session.current_version().id().to_string();
        session.delete_clause("c-5");
        session.save_version().await.unwrap();
        session.update_clause("c-2", "unsaved draft").unwrap();

        session.restore_version(&baseline).unwrap();
        assert_eq!(session.document().clauses(), initial_clauses().as_slice());
        assert_eq!(session.archive().len(), 2);
    }

    #[tokio::test]
    async fn recorded_restore_appends_revert_entry() {
        let mut session =
            session_on(initial_clauses()).with_restore_policy(RestorePolicy::Record);
        let baseline = session.current_version().id().to_string();
        session.delete_clause("c-5");
        session.save_version().await.unwrap();

        session.restore_version(&baseline).unwrap();
        assert_eq!(session.archive().len(), 3);
        assert_eq!(
            session.current_version().summary(),
            format!("Reverted to version {baseline}")
        );
        assert_eq!(session.current_version().clauses(), session.document().clauses());
    }

    #[test]
    fn restore_unknown_version_leaves_document() {
        let mut session = session_on(initial_clauses());
        session.delete_clause("c-1");
        assert!(matches!(
            session.restore_version("v-404"),
            Err(StoreError::VersionNotFound(_))
        ));
        assert_eq!(session.document().len(), 4);
    }

    #[tokio::test]
    async fn restore_drops_selection_of_missing_clause() {
        let mut session = session_on(initial_clauses());
        let baseline = session.current_version().id().to_string();
        let id = session.add_clause(ClauseType::Paragraph, "draft");
        assert_eq!(session.selected().map(|c| c.id.clone()), Some(id));

        session.restore_version(&baseline).unwrap();
        assert!(session.selected().is_none());
    }

    #[tokio::test]
    async fn analyze_uses_clause_content() {
        let session = session_on(initial_clauses());
        assert_eq!(session.analyze_clause("c-1").await.unwrap(), "3 words");
        assert_eq!(
            session.analyze_clause("c-404").await,
            Err(StoreError::ClauseNotFound("c-404".into()))
        );
    }
}
