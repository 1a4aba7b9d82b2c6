/*!
 * Prompt-based LLM translation provider.
 *
 * Sends each translation as a chat completion to an OpenAI-compatible
 * endpoint with a fixed translator system prompt. Unlike the remote
 * API provider, pair validation requires both codes to be in the known
 * catalog, since the prompt needs display names for both languages.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::LlmConfig;
use crate::errors::{ProviderError, TranslationError};
use crate::language_catalog::{default_catalog, language_name};
use crate::models::LanguageCatalog;
use crate::providers::TranslationProvider;

/// Client for an OpenAI-compatible chat completion API
#[derive(Debug)]
pub struct LlmTranslationProvider {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
    /// API key for authentication
    api_key: String,
    /// Model identifier
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Languages this provider will translate between
    catalog: LanguageCatalog,
}

/// Chat completion request
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    /// The model to use
    model: String,
    /// The messages for the conversation
    messages: Vec<ChatMessage>,
    /// Temperature for generation
    temperature: f32,
    /// Maximum number of tokens to generate
    max_tokens: u32,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    /// Role of the message sender (system, user)
    role: String,
    /// Content of the message
    content: String,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    /// Generated choices
    choices: Vec<ChatChoice>,
}

/// Individual choice in a chat completion response
#[derive(Debug, Deserialize)]
struct ChatChoice {
    /// The generated message
    message: ChatMessage,
}

impl LlmTranslationProvider {
    /// Create a new LLM provider from configuration
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            catalog: default_catalog(),
        }
    }

    /// System prompt instructing the model to translate and nothing else
    fn build_system_prompt(&self, source: &str, target: &str) -> String {
        format!(
            "You are a professional translator. Translate text accurately from {} to {}. \
             Only provide the translation, no additional text.",
            language_name(source),
            language_name(target)
        )
    }

    async fn call_completion_api(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "LLM API key not configured".to_string(),
            ));
        }

        let api_url = format!("{}/v1/chat/completions", self.endpoint);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.build_system_prompt(source, target),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
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

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            ProviderError::ParseError("Completion response contained no choices".to_string())
        })?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[async_trait]
impl TranslationProvider for LlmTranslationProvider {
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
            .call_completion_api(text, source_language, target_language)
            .await?;
        debug!(
            "LLM translation completed: {} -> {}",
            source_language, target_language
        );
        Ok(translated)
    }

    fn supported_languages(&self) -> LanguageCatalog {
        self.catalog.clone()
    }

    fn validate_language_pair(&self, source_language: &str, target_language: &str) -> bool {
        // Prompt construction needs display names, so both codes must be
        // catalog members.
        self.catalog.contains_key(source_language)
            && self.catalog.contains_key(target_language)
            && source_language != target_language
    }

    fn name(&self) -> &'static str {
        "LlmTranslationProvider"
    }
}
