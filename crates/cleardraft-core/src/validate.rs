//! Structural rules a document must satisfy before a version can be saved.
//!
//! Every rule runs; violations are collected in document order rather than
//! stopping at the first one. The whole-document rule is reported first.

use crate::model::{Clause, ClauseType, ValidationResult};

pub const EMPTY_DOCUMENT: &str = "Document must contain at least one clause.";

/// Check `clauses` against the structural rules.
pub fn validate(clauses: &[Clause]) -> ValidationResult {
    let mut errors = Vec::new();

    if clauses.is_empty() {
        errors.push(EMPTY_DOCUMENT.to_string());
    }

    for (index, clause) in clauses.iter().enumerate() {
        if clause.kind == ClauseType::Heading && clause.content.trim().is_empty() {
            errors.push(format!(
                "Clause {}: Heading cannot be empty.",
                clause_label(clause, index)
            ));
        }
        if clause.id.is_empty() {
            errors.push(format!("Clause at index {index} is missing a unique ID."));
        }
    }

    ValidationResult { errors }
}

/// Numbering label if present, otherwise the 1-based position.
fn clause_label(clause: &Clause, index: usize) -> String {
    match clause.numbering.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => (index + 1).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(id: &str, content: &str) -> Clause {
        Clause::new(id, ClauseType::Heading, content)
    }

    fn paragraph(id: &str, content: &str) -> Clause {
        Clause::new(id, ClauseType::Paragraph, content)
    }

    #[test]
    fn empty_document_has_single_error() {
        let result = validate(&[]);
        assert!(!result.is_valid());
        assert_eq!(result.errors, vec![EMPTY_DOCUMENT.to_string()]);
    }

    #[test]
    fn whitespace_heading_is_rejected() {
        let result = validate(&[heading("c-1", "   ").with_numbering("2.0")]);
        assert_eq!(result.errors, vec!["Clause 2.0: Heading cannot be empty."]);

        let result = validate(&[heading("c-1", "TERM").with_numbering("2.0")]);
        assert!(result.is_valid());
    }

    #[test]
    fn empty_paragraph_is_allowed() {
        assert!(validate(&[heading("c-1", "TERM"), paragraph("c-2", "")]).is_valid());
    }

    #[test]
    fn heading_label_falls_back_to_position() {
        let clauses = [paragraph("c-1", "Preamble"), heading("c-2", "")];
        assert_eq!(
            validate(&clauses).errors,
            vec!["Clause 2: Heading cannot be empty."]
        );

        let blank_label = [heading("c-1", "\t").with_numbering("")];
        assert_eq!(
            validate(&blank_label).errors,
            vec!["Clause 1: Heading cannot be empty."]
        );
    }

    #[test]
    fn missing_id_reports_zero_based_index() {
        let clauses = [heading("c-1", "TERM"), paragraph("", "body")];
        assert_eq!(
            validate(&clauses).errors,
            vec!["Clause at index 1 is missing a unique ID."]
        );
    }

    #[test]
    fn errors_follow_document_order() {
        let clauses = [
            heading("", ""),
            paragraph("c-2", "ok"),
            heading("c-3", " ").with_numbering("3.0"),
        ];
        assert_eq!(
            validate(&clauses).errors,
            vec![
                "Clause 1: Heading cannot be empty.",
                "Clause at index 0 is missing a unique ID.",
                "Clause 3.0: Heading cannot be empty.",
            ]
        );
    }

    #[test]
    fn validity_matches_error_list() {
        let samples: Vec<Vec<Clause>> = vec![
            vec![],
            vec![heading("c-1", "MSA")],
            vec![heading("c-1", "")],
            vec![paragraph("", "")],
            vec![heading("c-1", "MSA"), paragraph("c-2", "text")],
        ];
        for clauses in samples {
            let result = validate(&clauses);
            assert_eq!(result.is_valid(), result.errors.is_empty());
        }
    }
}
