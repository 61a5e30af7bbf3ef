//! Prompt templates sent to the text model.

use cleardraft_core::{ChangeStats, Clause, ClauseType};

/// Critique request for a single clause.
pub fn analysis_prompt(text: &str) -> String {
    format!(
        "You are a senior legal editor. \
         Analyze the following contract clause for ambiguity, passive voice, or potential loopholes. \
         Keep it brief (under 50 words). \
         Clause: \"{text}\""
    )
}

/// One-sentence audit-log summary request for a document change.
pub fn summary_prompt(old: &[Clause], new: &[Clause]) -> String {
    let stats = ChangeStats::between(old, new);
    format!(
        "Compare these two document states and summarize the key changes in one sentence for a legal audit log.\n\
         \n\
         Old State Summary: {old_len} clauses.\n\
         New State Summary: {new_len} clauses.\n\
         Clauses added: {added}. Clauses removed: {removed}. Clauses modified: {modified}.\n\
         {changed}\
         \n\
         Focus on general intent of changes (e.g. \"Modified termination clause\").",
        old_len = stats.old_len,
        new_len = stats.new_len,
        added = stats.added,
        removed = stats.removed,
        modified = stats.modified,
        changed = changed_headings(old, new),
    )
}

/// "Affected sections: TERM AND TERMINATION\n" for headings of sections that
/// contain an added or modified clause; empty when nothing is attributable.
fn changed_headings(old: &[Clause], new: &[Clause]) -> String {
    let mut current_heading: Option<&str> = None;
    let mut touched: Vec<&str> = Vec::new();

    for clause in new {
        if clause.kind == ClauseType::Heading {
            current_heading = Some(clause.content.trim());
        }
        let unchanged = old.iter().any(|c| c == clause);
        if !unchanged
            && let Some(heading) = current_heading
            && !heading.is_empty()
            && !touched.contains(&heading)
        {
            touched.push(heading);
        }
    }

    if touched.is_empty() {
        String::new()
    } else {
        format!("Affected sections: {}\n", touched.join(", "))
    }
}
