//! Capabilities the editor consumes from an external text-generation service.
//!
//! Both calls are best effort: implementations absorb their own failures and
//! answer with one of the fixed messages below instead of returning an error.

use async_trait::async_trait;

use crate::model::Clause;

/// Analysis answer when no service is configured.
pub const ANALYSIS_UNAVAILABLE: &str = "AI service unavailable: Missing API Key.";
/// Analysis answer when the service replied with no text.
pub const ANALYSIS_EMPTY: &str = "No analysis generated.";
/// Analysis answer when the call failed.
pub const ANALYSIS_FAILED: &str = "Failed to analyze clause.";

/// Summary used when no service is configured.
pub const SUMMARY_UNAVAILABLE: &str = "Manual version save (AI unavailable).";
/// Summary used when the service replied with no text.
pub const SUMMARY_EMPTY: &str = "Version saved.";
/// Summary used when the call failed.
pub const SUMMARY_FAILED: &str = "Version saved successfully.";

/// Critiques a single clause (ambiguity, passive voice, loopholes).
#[async_trait]
pub trait ClauseAnalyzer: Send + Sync {
    async fn analyze_clause_text(&self, text: &str) -> String;
}

/// Describes the change between two document states in one sentence.
#[async_trait]
pub trait ChangeSummarizer: Send + Sync {
    async fn summarize_changes(&self, old: &[Clause], new: &[Clause]) -> String;
}
