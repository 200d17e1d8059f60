//! Environment-driven configuration.

use crate::provider::openai::DEFAULT_MODEL;

/// Configuration for the endpoint credential and model selection.
///
/// A missing `api_key` is not an error: the agent degrades to a fixed
/// placeholder reply instead of calling out.
#[derive(Debug, Clone)]
pub struct StockhandConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for StockhandConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl StockhandConfig {
    /// Load from environment variables.
    ///
    /// Reads `OPENAI_API_KEY` (falling back to `RAILWAY_OPENAI_KEY`),
    /// `OPENAI_BASE_URL`, and `STOCKHAND_MODEL`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let api_key = std::env::var("OPENAI_API_KEY")
            .or_else(|_| std::env::var("RAILWAY_OPENAI_KEY"))
            .ok();
        let base_url = std::env::var("OPENAI_BASE_URL").ok();
        let model =
            std::env::var("STOCKHAND_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            base_url,
            model,
        }
    }

    /// Whether an endpoint credential is configured.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = StockhandConfig::default();
        assert!(!config.has_credentials());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn explicit_key_counts_as_credentials() {
        let config = StockhandConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert!(config.has_credentials());
    }
}
