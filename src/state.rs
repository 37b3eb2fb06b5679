use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::detect::interface::LanguageDetector;
use crate::detect::keyword::KeywordDetector;
use crate::translate::factory::TranslatorFactory;
use crate::translate::interface::TranslationProvider;

/// Shared application state. The gateway is stateless per request, so
/// this holds only configuration and the provider handles.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub detector: Arc<dyn LanguageDetector>,
    pub translator: Arc<dyn TranslationProvider>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = TranslatorFactory::create_translator(&config.translator_config)?;

        Ok(Self {
            config,
            detector: Arc::new(KeywordDetector::new()),
            translator,
        })
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
