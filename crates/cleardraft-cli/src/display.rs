//! Plain-text rendering of documents, validation results, and history.

use cleardraft_core::{Clause, ClauseType, DocumentVersion, ValidationResult};
use cleardraft_store::{AnnotationStore, VersionArchive};

const MAX_PREVIEW_CHARS: usize = 72;

// ── Public API ──

/// Print every clause as a numbered line, headings in capitals, locked and
/// annotated clauses flagged.
pub fn print_document(clauses: &[Clause], annotations: Option<&AnnotationStore>) {
    if clauses.is_empty() {
        println!("(empty document)");
        return;
    }
    for (index, clause) in clauses.iter().enumerate() {
        let label = clause
            .numbering
            .clone()
            .unwrap_or_else(|| (index + 1).to_string());
        let mut flags = String::new();
        if clause.locked {
            flags.push_str(" [locked]");
        }
        if let Some(store) = annotations {
            let open = store.unresolved_for(&clause.id).len();
            if open > 0 {
                flags.push_str(&format!(" [{open} open comments]"));
            }
        }
        match clause.kind {
            ClauseType::Heading => {
                println!();
                println!("{label:<6} {}{flags}", clause.content.to_uppercase());
            }
            ClauseType::Paragraph => {
                println!("{label:<6} {}{flags}", clause.content);
            }
            ClauseType::ListItem => {
                println!("{label:<6}   • {}{flags}", clause.content);
            }
        }
    }
    println!();
}

/// Print validation errors, or a one-line all-clear.
pub fn print_validation(result: &ValidationResult) {
    if result.is_valid() {
        println!("Structure OK");
        return;
    }
    println!("Structure Violations Found:");
    for error in &result.errors {
        println!("  - {error}");
    }
}

/// Print the version history, newest first, marking the current entry.
pub fn print_history(archive: &VersionArchive) {
    let current = archive.current().id();
    println!("Version History ({})", archive.len());
    for version in archive.iter().rev() {
        print_version(version, version.id() == current);
    }
}

// ── Helpers ──

fn print_version(version: &DocumentVersion, is_current: bool) {
    let marker = if is_current { "*" } else { " " };
    println!(
        "{marker} {}  {}  {} ({} clauses)",
        version.timestamp().format("%Y-%m-%d %H:%M:%S"),
        version.id(),
        version.author(),
        version.clauses().len(),
    );
    println!("    {}", preview(version.summary()));
}

/// First line of `text`, cut to `MAX_PREVIEW_CHARS` characters.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() > MAX_PREVIEW_CHARS {
        let cut: String = line.chars().take(MAX_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_preview_unchanged() {
        assert_eq!(preview("Initial Import"), "Initial Import");
    }

    #[test]
    fn long_preview_truncated_on_char_boundary() {
        let text = "é".repeat(100);
        let out = preview(&text);
        assert_eq!(out.chars().count(), MAX_PREVIEW_CHARS);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn preview_keeps_first_line() {
        assert_eq!(preview("Modified term.\nDetails follow."), "Modified term.");
    }
}
