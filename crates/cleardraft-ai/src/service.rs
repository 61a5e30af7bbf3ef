//! Text services implementing the editor's analyzer and summarizer
//! capabilities, with every failure folded into a fixed answer.

use async_trait::async_trait;
use cleardraft_core::text_service::{ANALYSIS_UNAVAILABLE, SUMMARY_UNAVAILABLE};
#[cfg(feature = "gemini")]
use cleardraft_core::text_service::{
    ANALYSIS_EMPTY, ANALYSIS_FAILED, SUMMARY_EMPTY, SUMMARY_FAILED,
};
use cleardraft_core::{ChangeSummarizer, ClauseAnalyzer, Clause};
use tracing::warn;

use crate::AiConfig;
#[cfg(feature = "gemini")]
use crate::gemini::GeminiClient;
#[cfg(feature = "gemini")]
use crate::prompt::{analysis_prompt, summary_prompt};

/// Stand-in used when no model is configured: answers with the
/// "unavailable" messages without doing any work.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineService;

#[async_trait]
impl ClauseAnalyzer for OfflineService {
    async fn analyze_clause_text(&self, _text: &str) -> String {
        ANALYSIS_UNAVAILABLE.to_string()
    }
}

#[async_trait]
impl ChangeSummarizer for OfflineService {
    async fn summarize_changes(&self, _old: &[Clause], _new: &[Clause]) -> String {
        SUMMARY_UNAVAILABLE.to_string()
    }
}

/// The text service selected by configuration.
pub enum TextService {
    Offline(OfflineService),
    #[cfg(feature = "gemini")]
    Gemini(GeminiClient),
}

impl TextService {
    /// Pick the hosted model when an API key is configured and the `gemini`
    /// feature is enabled; otherwise go offline.
    pub fn from_config(config: &AiConfig) -> Self {
        if !config.has_api_key() {
            warn!("{} not set; AI features unavailable", crate::config::API_KEY_VAR);
            return Self::Offline(OfflineService);
        }
        Self::connect(config)
    }

    #[cfg(feature = "gemini")]
    fn connect(config: &AiConfig) -> Self {
        match GeminiClient::from_config(config) {
            Ok(Some(client)) => Self::Gemini(client),
            Ok(None) => Self::Offline(OfflineService),
            Err(e) => {
                warn!(error = %e, "could not build gemini client; AI features unavailable");
                Self::Offline(OfflineService)
            }
        }
    }

    #[cfg(not(feature = "gemini"))]
    fn connect(_config: &AiConfig) -> Self {
        warn!("built without the `gemini` feature; AI features unavailable");
        Self::Offline(OfflineService)
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline(_))
    }
}

#[async_trait]
impl ClauseAnalyzer for TextService {
    async fn analyze_clause_text(&self, text: &str) -> String {
        match self {
            Self::Offline(offline) => offline.analyze_clause_text(text).await,
            #[cfg(feature = "gemini")]
            Self::Gemini(client) => match client.generate(&analysis_prompt(text)).await {
                Ok(answer) => non_empty_or(answer, ANALYSIS_EMPTY),
                Err(e) => {
                    warn!(error = %e, "clause analysis failed");
                    ANALYSIS_FAILED.to_string()
                }
            },
        }
    }
}

#[async_trait]
impl ChangeSummarizer for TextService {
    async fn summarize_changes(&self, old: &[Clause], new: &[Clause]) -> String {
        match self {
            Self::Offline(offline) => offline.summarize_changes(old, new).await,
            #[cfg(feature = "gemini")]
            Self::Gemini(client) => match client.generate(&summary_prompt(old, new)).await {
                Ok(answer) => non_empty_or(answer, SUMMARY_EMPTY),
                Err(e) => {
                    warn!(error = %e, "change summary failed");
                    SUMMARY_FAILED.to_string()
                }
            },
        }
    }
}

/// Trimmed model text, or `fallback` when the model said nothing.
#[cfg(feature = "gemini")]
fn non_empty_or(answer: String, fallback: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleardraft_core::seed::initial_clauses;

    #[tokio::test]
    async fn offline_answers_with_unavailable_messages() {
        let service = TextService::from_config(&AiConfig::default());
        assert!(service.is_offline());
        assert_eq!(
            service.analyze_clause_text("Either party may terminate.").await,
            ANALYSIS_UNAVAILABLE
        );
        let clauses = initial_clauses();
        assert_eq!(
            service.summarize_changes(&clauses, &clauses).await,
            SUMMARY_UNAVAILABLE
        );
    }

    #[cfg(feature = "gemini")]
    #[test]
    fn empty_answers_fall_back() {
        assert_eq!(non_empty_or("  \n".into(), SUMMARY_EMPTY), SUMMARY_EMPTY);
        assert_eq!(
            non_empty_or(" Shortened the term. \n".into(), SUMMARY_EMPTY),
            "Shortened the term."
        );
    }

    #[cfg(feature = "gemini")]
    #[tokio::test]
    async fn failing_service_uses_failure_messages() {
        let config = AiConfig {
            base_url: "http://127.0.0.1:1".into(),
            timeout: Some(std::time::Duration::from_secs(2)),
            ..AiConfig::default()
        }
        .with_api_key("test-key");
        let service = TextService::from_config(&config);
        assert!(!service.is_offline());

        assert_eq!(service.analyze_clause_text("x").await, ANALYSIS_FAILED);
        let clauses = initial_clauses();
        assert_eq!(
            service.summarize_changes(&clauses, &[]).await,
            SUMMARY_FAILED
        );
    }
}
