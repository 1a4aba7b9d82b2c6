/*!
 * Request and response models for the translation core.
 *
 * Requests are what the boundary layer hands to the orchestration
 * service; results are built fresh per call and immutable once
 * constructed. All types serialize with camelCase field names for the
 * JSON boundary.
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mapping from language code to display name, owned by each provider
pub type LanguageCatalog = HashMap<String, String>;

/// A single-text translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// Text to translate (1-5000 characters)
    pub text: String,

    /// Source language code
    pub source_language: String,

    /// Target language code, must differ from the source
    pub target_language: String,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// A batch translation request sharing one language pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTranslationRequest {
    /// Ordered texts to translate (1-100 non-blank entries)
    pub texts: Vec<String>,

    /// Source language code
    pub source_language: String,

    /// Target language code, must differ from the source
    pub target_language: String,
}

impl BatchTranslationRequest {
    /// Create a new batch translation request
    pub fn new(
        texts: Vec<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            texts,
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Result of a single translation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// The text that was submitted
    pub original_text: String,

    /// The translated text returned by the provider
    pub translated_text: String,

    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// Name of the provider that performed the translation
    pub engine: String,

    /// When the result was produced
    pub timestamp: DateTime<Utc>,
}

/// Result of a batch translation, index-aligned with the input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTranslationResult {
    /// The texts that were submitted, in input order
    pub original_texts: Vec<String>,

    /// Translations, same length and index correspondence as the input
    pub translated_texts: Vec<String>,

    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// Name of the provider that performed the translation
    pub engine: String,

    /// Number of input texts
    pub count: usize,

    /// When the result was produced
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of the languages the active provider supports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguages {
    /// Language code to display name
    pub languages: LanguageCatalog,

    /// Name of the provider that owns the catalog
    pub engine: String,

    /// Number of entries in the catalog
    pub total: usize,
}

/// Outcome of a health probe; always well-formed, never an error
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Whether the canary translation completed without error
    pub healthy: bool,

    /// Name of the probed provider, or "unknown" if resolution failed
    pub engine: String,

    /// When the probe finished
    pub timestamp: DateTime<Utc>,

    /// Probe duration in milliseconds, 0.0 if the provider never ran
    pub response_time_ms: f64,
}

impl HealthStatus {
    /// Fallback status used when the provider cannot even be resolved
    pub fn unresolved() -> Self {
        Self {
            healthy: false,
            engine: "unknown".to_string(),
            timestamp: Utc::now(),
            response_time_ms: 0.0,
        }
    }
}
