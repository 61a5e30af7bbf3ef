//! Section numbering for contract clauses.
//!
//! Numbering is display metadata supplied by the caller. Inserting or
//! deleting clauses never touches it; `renumber` is an explicit pass the
//! editor can run when it wants labels rebuilt from document order.
//!
//! # Contract numbering conventions
//!
//! - Headings open a section: 1.0, 2.0, 3.0
//! - Paragraphs and list items are numbered within their section: 2.1, 2.2
//! - Body clauses before the first heading belong to section 0: 0.1, 0.2

use crate::model::{Clause, ClauseType};

/// Label given to clauses inserted by the editor before any renumbering.
pub const NEW_CLAUSE_LABEL: &str = "NEW";

/// Rewrite every clause's `numbering` from its position in the document.
///
/// Returns the number of labels that changed.
pub fn renumber(clauses: &mut [Clause]) -> usize {
    let mut section = 0u32;
    let mut item = 0u32;
    let mut changed = 0;

    for clause in clauses.iter_mut() {
        let label = match clause.kind {
            ClauseType::Heading => {
                section += 1;
                item = 0;
                section_label(section, 0)
            }
            ClauseType::Paragraph | ClauseType::ListItem => {
                item += 1;
                section_label(section, item)
            }
        };
        if clause.numbering.as_deref() != Some(label.as_str()) {
            clause.numbering = Some(label);
            changed += 1;
        }
    }

    changed
}

/// "2" + "1" → "2.1"
pub fn section_label(section: u32, item: u32) -> String {
    format!("{section}.{item}")
}
