//! API credentials loaded from the environment

use thiserror::Error;

/// Errors raised while loading credentials
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing Gemini API key: set GEMINI_API_KEY or GOOGLE_API_KEY")]
    MissingGeminiKey,
}

/// Read-only API credentials for the process lifetime
///
/// The Gemini key is required; the Custom Search pair is optional and
/// controls whether Google is used as the primary search provider.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub gemini_api_key: String,
    pub search_api_key: Option<String>,
    pub search_engine_id: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables
    ///
    /// `GEMINI_API_KEY` is preferred, `GOOGLE_API_KEY` accepted as an alias.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingGeminiKey)?;

        Ok(Self {
            gemini_api_key,
            search_api_key: non_empty_var("GOOGLE_SEARCH_API_KEY"),
            search_engine_id: non_empty_var("GOOGLE_SEARCH_ENGINE_ID"),
        })
    }

    /// Whether the Google Custom Search provider is fully configured
    pub fn has_google_search(&self) -> bool {
        self.search_api_key.is_some() && self.search_engine_id.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_google_search_requires_both() {
        let creds = Credentials {
            gemini_api_key: "k".to_string(),
            search_api_key: Some("key".to_string()),
            search_engine_id: None,
        };
        assert!(!creds.has_google_search());

        let creds = Credentials {
            gemini_api_key: "k".to_string(),
            search_api_key: Some("key".to_string()),
            search_engine_id: Some("cx".to_string()),
        };
        assert!(creds.has_google_search());
    }
}
