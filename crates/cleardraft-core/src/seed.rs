//! Starter contract loaded into a fresh editing session.

use crate::model::{Clause, ClauseType};

/// Summary recorded on the baseline version created at session start.
pub const BASELINE_SUMMARY: &str = "Initial Import";

/// A short Master Service Agreement with two sections.
pub fn initial_clauses() -> Vec<Clause> {
    vec![
        Clause::new("c-1", ClauseType::Heading, "MASTER SERVICE AGREEMENT")
            .with_numbering("1.0")
            .locked(),
        Clause::new(
            "c-2",
            ClauseType::Paragraph,
            "This Master Service Agreement (\"Agreement\") is entered into as of the Effective Date by and between the Customer and the Service Provider.",
        )
        .with_numbering("1.1"),
        Clause::new("c-3", ClauseType::Heading, "TERM AND TERMINATION")
            .with_numbering("2.0")
            .locked(),
        Clause::new(
            "c-4",
            ClauseType::Paragraph,
            "The term of this Agreement shall commence on the Effective Date and shall continue for a period of twelve (12) months, unless earlier terminated in accordance with the provisions of this Section.",
        )
        .with_numbering("2.1"),
        Clause::new(
            "c-5",
            ClauseType::Paragraph,
            "Either party may terminate this Agreement for cause immediately upon written notice if the other party breaches any material term of this Agreement.",
        )
        .with_numbering("2.2"),
    ]
}
