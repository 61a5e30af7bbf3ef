//! Connection settings for the hosted text model.

use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const API_KEY_VAR: &str = "API_KEY";
pub const MODEL_VAR: &str = "CLEARDRAFT_MODEL";
pub const BASE_URL_VAR: &str = "CLEARDRAFT_AI_URL";
pub const TIMEOUT_VAR: &str = "CLEARDRAFT_AI_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// Without a key every call short-circuits to the offline answers.
    pub api_key: Option<String>,
    pub model: String,
    /// Like `https://generativelanguage.googleapis.com` (no trailing slash).
    pub base_url: String,
    /// Per-request timeout. `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl AiConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any name → value lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get(API_KEY_VAR),
            model: get(MODEL_VAR).unwrap_or(defaults.model),
            base_url: get(BASE_URL_VAR).unwrap_or(defaults.base_url),
            timeout: get(TIMEOUT_VAR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
