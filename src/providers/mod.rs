/*!
 * Provider implementations for the translation backends.
 *
 * This module contains the capability contract every backend satisfies
 * and the concrete implementations:
 * - `remote`: remote translation REST API
 * - `llm`: prompt-based LLM backend (OpenAI-compatible)
 * - `local`: local model stub
 * - `mock`: configurable providers for testing
 */

use std::fmt::Debug;

use async_trait::async_trait;
use log::error;

use crate::errors::TranslationError;
use crate::models::LanguageCatalog;

/// Text used for the canary health probe
pub const HEALTH_PROBE_TEXT: &str = "hello";

/// Source language of the canary health probe
pub const HEALTH_PROBE_SOURCE: &str = "en";

/// Target language of the canary health probe
pub const HEALTH_PROBE_TARGET: &str = "es";

/// Common trait for all translation providers
///
/// This trait defines the capability contract the orchestration service
/// dispatches against, allowing backends to be used interchangeably
/// behind the engine selection.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a single text from source to target language
    ///
    /// Fails with `InvalidLanguagePair` when the provider's own policy
    /// rejects the pair and `ProviderUnavailable` on backend failure.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;

    /// Translate multiple texts under one shared language pair
    ///
    /// The default strategy delegates sequentially to `translate`:
    /// output order matches input order and the first per-item failure
    /// fails the whole batch. Implementations may parallelize as long
    /// as both properties hold.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<Vec<String>, TranslationError> {
        let mut translated = Vec::with_capacity(texts.len());
        for text in texts {
            translated.push(
                self.translate(text, source_language, target_language)
                    .await?,
            );
        }
        Ok(translated)
    }

    /// Snapshot of the languages this provider supports
    ///
    /// Returns an independent copy; callers cannot mutate provider state
    /// through it.
    fn supported_languages(&self) -> LanguageCatalog;

    /// Whether this provider accepts the language pair
    ///
    /// Policy is deliberately per-provider: the remote API accepts any
    /// two distinct two-letter codes, while catalog-backed providers
    /// require both codes to be known.
    fn validate_language_pair(&self, source_language: &str, target_language: &str) -> bool;

    /// Probe backend liveness with a canary translation
    ///
    /// Never propagates an error: any failure maps to `false`.
    async fn health_check(&self) -> bool {
        match self
            .translate(HEALTH_PROBE_TEXT, HEALTH_PROBE_SOURCE, HEALTH_PROBE_TARGET)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                error!("Health check failed for {}: {}", self.name(), e);
                false
            }
        }
    }

    /// Stable provider identifier used in responses and logs
    fn name(&self) -> &'static str;
}

pub mod llm;
pub mod local;
pub mod mock;
pub mod remote;

pub use llm::LlmTranslationProvider;
pub use local::LocalTranslationProvider;
pub use mock::{MockBehavior, MockProvider};
pub use remote::RemoteTranslationProvider;
