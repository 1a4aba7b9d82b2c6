/*!
 * Request shape validation for the translation core.
 *
 * These checks run before any provider is resolved, so a malformed
 * request never reaches a backend. Limits come from the `api` section
 * of the configuration.
 */

use crate::app_config::ApiConfig;
use crate::errors::TranslationError;
use crate::models::{BatchTranslationRequest, TranslationRequest};

/// Validate a single-text translation request
pub fn validate_translate_request(
    request: &TranslationRequest,
    limits: &ApiConfig,
) -> Result<(), TranslationError> {
    if request.text.trim().is_empty() {
        return Err(TranslationError::Validation("Text is required".to_string()));
    }

    let length = request.text.chars().count();
    if length > limits.max_text_length {
        return Err(TranslationError::Validation(format!(
            "Text must be between 1 and {} characters, got {}",
            limits.max_text_length, length
        )));
    }

    validate_language_pair_shape(&request.source_language, &request.target_language)
}

/// Validate a batch translation request
pub fn validate_batch_request(
    request: &BatchTranslationRequest,
    limits: &ApiConfig,
) -> Result<(), TranslationError> {
    if request.texts.is_empty() {
        return Err(TranslationError::Validation(
            "Texts list is required".to_string(),
        ));
    }

    if request.texts.len() > limits.max_batch_size {
        return Err(TranslationError::Validation(format!(
            "Must provide between 1 and {} texts, got {}",
            limits.max_batch_size,
            request.texts.len()
        )));
    }

    for (index, text) in request.texts.iter().enumerate() {
        if text.trim().is_empty() {
            return Err(TranslationError::Validation(format!(
                "Text at index {} cannot be blank",
                index
            )));
        }
        let length = text.chars().count();
        if length > limits.max_text_length {
            return Err(TranslationError::Validation(format!(
                "Text at index {} exceeds {} characters",
                index, limits.max_text_length
            )));
        }
    }

    validate_language_pair_shape(&request.source_language, &request.target_language)
}

/// Shared shape checks on the language pair
///
/// The same-language invariant is checked here once per request; it
/// applies to the pair, not per batch item.
fn validate_language_pair_shape(source: &str, target: &str) -> Result<(), TranslationError> {
    if source.trim().is_empty() {
        return Err(TranslationError::Validation(
            "Source language is required".to_string(),
        ));
    }
    if target.trim().is_empty() {
        return Err(TranslationError::Validation(
            "Target language is required".to_string(),
        ));
    }
    if source.trim() == target.trim() {
        return Err(TranslationError::Validation(format!(
            "Source and target languages must differ, both are '{}'",
            source.trim()
        )));
    }
    Ok(())
}
