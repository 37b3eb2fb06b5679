use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::TranslatorConfig;
use super::google::GoogleTranslator;
use super::interface::TranslationProvider;
use super::mock::MockTranslator;

/// Factory for creating the translation provider
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a provider based on configuration.
    ///
    /// A configured API key selects the Google client; without one the
    /// mock provider is used. Exactly one implementation exists per
    /// process.
    pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn TranslationProvider>> {
        match config.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => {
                info!("Initializing translation provider: google ({})", config.endpoint);
                Ok(Arc::new(GoogleTranslator::new(
                    config.endpoint.clone(),
                    key.to_string(),
                    Duration::from_secs(config.timeout_secs),
                )?))
            }
            None => {
                info!("Initializing translation provider: mock");
                Ok(Arc::new(MockTranslator))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_api_key_selects_the_mock_provider() {
        let config = TranslatorConfig::default();
        let translator = TranslatorFactory::create_translator(&config).unwrap();
        assert_eq!(translator.name(), "mock");
    }

    #[test]
    fn empty_api_key_selects_the_mock_provider() {
        let config = TranslatorConfig {
            api_key: Some(String::new()),
            ..TranslatorConfig::default()
        };
        let translator = TranslatorFactory::create_translator(&config).unwrap();
        assert_eq!(translator.name(), "mock");
    }

    #[test]
    fn api_key_selects_the_google_provider() {
        let config = TranslatorConfig {
            api_key: Some("test-key".to_string()),
            ..TranslatorConfig::default()
        };
        let translator = TranslatorFactory::create_translator(&config).unwrap();
        assert_eq!(translator.name(), "google");
    }
}
