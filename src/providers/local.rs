/*!
 * Local model translation provider.
 *
 * Currently a stub: it validates requests against the shared catalog
 * and returns a marked-up copy of the input instead of running real
 * inference. The configuration it carries (model name, device,
 * precision) is what an actual local inference backend would load.
 */

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::app_config::LocalConfig;
use crate::errors::TranslationError;
use crate::language_catalog::default_catalog;
use crate::models::LanguageCatalog;
use crate::providers::TranslationProvider;

/// Local model stub provider
#[derive(Debug)]
pub struct LocalTranslationProvider {
    /// Model settings a real inference backend would use
    config: LocalConfig,
    /// Languages this provider will translate between
    catalog: LanguageCatalog,
}

impl LocalTranslationProvider {
    /// Create a new local provider from configuration
    pub fn new(config: &LocalConfig) -> Self {
        info!(
            "Local translation provider initialized (model: {}, device: {})",
            config.model_name, config.device
        );
        warn!("Local translation runs as a stub; no model is loaded");
        Self {
            config: config.clone(),
            catalog: default_catalog(),
        }
    }

    /// Placeholder for real model inference
    fn simulate_translation(&self, text: &str) -> String {
        format!("[Translated: {}]", text)
    }

    /// Model identifier this provider is configured for
    pub fn model_name(&self) -> &str {
        &self.config.model_name
    }
}

#[async_trait]
impl TranslationProvider for LocalTranslationProvider {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if !self.validate_language_pair(source_language, target_language) {
            return Err(TranslationError::InvalidLanguagePair {
                source: source_language.to_string(),
                target: target_language.to_string(),
            });
        }

        debug!(
            "Local translation: {} -> {}",
            source_language, target_language
        );
        Ok(self.simulate_translation(text))
    }

    fn supported_languages(&self) -> LanguageCatalog {
        self.catalog.clone()
    }

    fn validate_language_pair(&self, source_language: &str, target_language: &str) -> bool {
        self.catalog.contains_key(source_language)
            && self.catalog.contains_key(target_language)
            && source_language != target_language
    }

    fn name(&self) -> &'static str {
        "LocalTranslationProvider"
    }
}
