//! Text-model integration: clause critiques and version summaries from a
//! hosted LLM, with an offline stand-in when none is configured.

pub mod config;
#[cfg(feature = "gemini")]
pub mod gemini;
pub mod prompt;
mod service;

pub use config::AiConfig;
#[cfg(feature = "gemini")]
pub use gemini::{AiError, GeminiClient};
pub use service::{OfflineService, TextService};
