/*!
 * Remote translation API provider.
 *
 * Talks to a LibreTranslate-compatible REST endpoint. The remote
 * service maintains its own language coverage, so pair validation only
 * checks that both codes are distinct two-letter codes and leaves the
 * rest to the backend.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::RemoteConfig;
use crate::errors::{ProviderError, TranslationError};
use crate::language_catalog::default_catalog;
use crate::models::LanguageCatalog;
use crate::providers::TranslationProvider;

/// Client for a remote translation REST API
#[derive(Debug)]
pub struct RemoteTranslationProvider {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
    /// API key, empty for unauthenticated instances
    api_key: String,
}

/// Request body for the remote translate endpoint
#[derive(Debug, Serialize)]
struct RemoteTranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Payload format
    format: &'static str,
    /// API key, omitted when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Response body from the remote translate endpoint
#[derive(Debug, Deserialize)]
struct RemoteTranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl RemoteTranslationProvider {
    /// Create a new remote provider from configuration
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    async fn call_translate_api(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let api_url = format!("{}/translate", self.endpoint);
        let body = RemoteTranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: if self.api_key.is_empty() {
                None
            } else {
                Some(&self.api_key)
            },
        };

        let response = self
            .client
            .post(&api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(message),
                429 => ProviderError::RateLimitExceeded(message),
                code => ProviderError::ApiError {
                    status_code: code,
                    message,
                },
            });
        }

        let parsed = response
            .json::<RemoteTranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.translated_text)
    }
}

#[async_trait]
impl TranslationProvider for RemoteTranslationProvider {
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

        let translated = self
            .call_translate_api(text, source_language, target_language)
            .await?;
        debug!(
            "Remote translation completed: {} -> {}",
            source_language, target_language
        );
        Ok(translated)
    }

    fn supported_languages(&self) -> LanguageCatalog {
        // The remote service covers far more than this; the catalog
        // lists the commonly requested subset.
        default_catalog()
    }

    fn validate_language_pair(&self, source_language: &str, target_language: &str) -> bool {
        // No exhaustive catalog on this side: any two distinct
        // two-letter codes go through to the backend.
        source_language.len() == 2
            && target_language.len() == 2
            && source_language != target_language
    }

    fn name(&self) -> &'static str {
        "RemoteTranslationProvider"
    }
}
