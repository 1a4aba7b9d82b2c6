/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different backend
 * behaviors:
 * - `MockProvider::working()` - always succeeds with translated text
 * - `MockProvider::failing()` - always fails with a provider error
 * - `MockProvider::rejecting_pairs()` - rejects every language pair
 * - `MockProvider::slow(ms)` - delays before succeeding
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::{ProviderError, TranslationError};
use crate::language_catalog::default_catalog;
use crate::models::LanguageCatalog;
use crate::providers::TranslationProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a marked-up translation
    Working,
    /// Always fails with a provider error
    Failing,
    /// Rejects every language pair
    RejectingPairs,
    /// Delays before succeeding (for timing assertions)
    Slow {
        /// Delay before responding
        delay_ms: u64,
    },
}

/// Mock provider for testing dispatch behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Count of translate calls that reached this provider
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that rejects every language pair
    pub fn rejecting_pairs() -> Self {
        Self::new(MockBehavior::RejectingPairs)
    }

    /// Create a mock provider that delays before succeeding
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Number of translate calls that reached this provider
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
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

        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                Ok(format!("[MOCK to {}] {}", target_language, text))
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }
            .into()),

            // Unreachable through translate: RejectingPairs fails pair
            // validation above
            MockBehavior::RejectingPairs => Ok(text.to_string()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(format!("[MOCK to {}] {}", target_language, text))
            }
        }
    }

    fn supported_languages(&self) -> LanguageCatalog {
        default_catalog()
    }

    fn validate_language_pair(&self, source_language: &str, target_language: &str) -> bool {
        if self.behavior == MockBehavior::RejectingPairs {
            return false;
        }
        !source_language.is_empty()
            && !target_language.is_empty()
            && source_language != target_language
    }

    fn name(&self) -> &'static str {
        "MockProvider"
    }
}
