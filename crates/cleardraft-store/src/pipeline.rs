//! Save and restore: the two operations that cross the version archive.

use cleardraft_core::{ChangeSummarizer, Clause, DocumentVersion, ValidationResult, validate};
use tracing::{info, warn};

use crate::{StoreError, VersionArchive};

/// Validate `live`, summarize it against the current version, and append a
/// snapshot to `archive`.
///
/// On a validation failure the archive is left untouched and the failing
/// result is returned. The summarizer cannot fail the save; whatever text it
/// returns becomes the version summary.
pub async fn save_version(
    live: &[Clause],
    archive: &mut VersionArchive,
    summarizer: &dyn ChangeSummarizer,
    author: &str,
) -> Result<DocumentVersion, ValidationResult> {
    let validation = validate(live);
    if !validation.is_valid() {
        warn!(errors = validation.errors.len(), "save blocked by validation");
        return Err(validation);
    }

    let previous = archive.current().clauses();
    let summary = summarizer.summarize_changes(previous, live).await;

    let version = archive
        .append(DocumentVersion::snapshot(live, summary, author))
        .clone();
    info!(
        version_id = %version.id(),
        clauses = version.clauses().len(),
        history = archive.len(),
        "version saved"
    );
    Ok(version)
}

/// Copy of the clauses stored in version `version_id`.
///
/// Does not modify the archive.
pub fn restore_version(archive: &VersionArchive, version_id: &str) -> Result<Vec<Clause>, StoreError> {
    let version = archive
        .get(version_id)
        .ok_or_else(|| StoreError::VersionNotFound(version_id.to_string()))?;
    Ok(version.clauses().to_vec())
}
