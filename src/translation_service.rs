/*!
 * Orchestration service for the translation core.
 *
 * Every operation follows the same shape: validate, resolve the
 * provider through the factory, time the delegation, shape the
 * response. Errors from providers and the factory propagate unchanged
 * to the boundary layer, with one deliberate exception: `health_check`
 * absorbs every failure into a structured unhealthy result, because
 * monitoring depends on a well-formed answer even when the service is
 * degraded.
 */

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use log::{info, warn};

use crate::app_config::{ApiConfig, Config};
use crate::errors::TranslationError;
use crate::factory::ProviderFactory;
use crate::models::{
    BatchTranslationRequest, BatchTranslationResult, HealthStatus, SupportedLanguages,
    TranslationRequest, TranslationResult,
};
use crate::validation;

/// Translation orchestration service
#[derive(Debug)]
pub struct TranslationService {
    /// Provider registry and engine selection
    factory: Arc<ProviderFactory>,
    /// API limits enforced before dispatch
    limits: ApiConfig,
}

impl TranslationService {
    /// Create a service with the full provider set from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            factory: Arc::new(ProviderFactory::from_config(config)),
            limits: config.api.clone(),
        }
    }

    /// Create a service over an existing factory
    pub fn with_factory(factory: Arc<ProviderFactory>, limits: ApiConfig) -> Self {
        Self { factory, limits }
    }

    /// Translate a single text
    ///
    /// Validation failures and provider errors propagate unchanged.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        validation::validate_translate_request(request, &self.limits)?;

        let start = Instant::now();
        let provider = self.factory.get_provider()?;

        let translated_text = provider
            .translate(
                &request.text,
                &request.source_language,
                &request.target_language,
            )
            .await?;

        info!(
            "Translation completed in {}ms - {} -> {}",
            start.elapsed().as_millis(),
            request.source_language,
            request.target_language
        );

        Ok(TranslationResult {
            original_text: request.text.clone(),
            translated_text,
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            engine: provider.name().to_string(),
            timestamp: Utc::now(),
        })
    }

    /// Translate an ordered batch of texts under one language pair
    ///
    /// A single item failure fails the whole batch; output order always
    /// matches input order.
    pub async fn translate_batch(
        &self,
        request: &BatchTranslationRequest,
    ) -> Result<BatchTranslationResult, TranslationError> {
        validation::validate_batch_request(request, &self.limits)?;

        let start = Instant::now();
        let provider = self.factory.get_provider()?;

        let translated_texts = provider
            .translate_batch(
                &request.texts,
                &request.source_language,
                &request.target_language,
            )
            .await?;

        info!(
            "Batch translation completed in {}ms - {} texts translated",
            start.elapsed().as_millis(),
            request.texts.len()
        );

        Ok(BatchTranslationResult {
            original_texts: request.texts.clone(),
            translated_texts,
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            engine: provider.name().to_string(),
            count: request.texts.len(),
            timestamp: Utc::now(),
        })
    }

    /// Snapshot of the active provider's language catalog
    pub fn supported_languages(&self) -> Result<SupportedLanguages, TranslationError> {
        let provider = self.factory.get_provider()?;
        let languages = provider.supported_languages();

        Ok(SupportedLanguages {
            total: languages.len(),
            engine: provider.name().to_string(),
            languages,
        })
    }

    /// Probe the active provider's liveness
    ///
    /// Never returns an error: when the provider cannot be resolved the
    /// result falls back to `engine: "unknown"` with zero elapsed time.
    pub async fn health_check(&self) -> HealthStatus {
        let start = Instant::now();

        match self.factory.get_provider() {
            Ok(provider) => {
                let healthy = provider.health_check().await;
                HealthStatus {
                    healthy,
                    engine: provider.name().to_string(),
                    timestamp: Utc::now(),
                    response_time_ms: start.elapsed().as_secs_f64() * 1000.0,
                }
            }
            Err(e) => {
                warn!("Health check could not resolve a provider: {}", e);
                HealthStatus::unresolved()
            }
        }
    }

    /// Switch the active engine, returning the new provider's name
    pub fn switch_engine(&self, engine: &str) -> Result<String, TranslationError> {
        let provider = self.factory.switch_engine(engine)?;
        Ok(provider.name().to_string())
    }

    /// The current engine selection string
    pub fn current_engine(&self) -> String {
        self.factory.current_engine()
    }
}
