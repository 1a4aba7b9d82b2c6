/*!
 * Tests for provider implementations and the capability contract
 */

use lingoswitch::app_config::{LlmConfig, LocalConfig, RemoteConfig};
use lingoswitch::errors::TranslationError;
use lingoswitch::providers::{
    LlmTranslationProvider, LocalTranslationProvider, MockProvider, RemoteTranslationProvider,
    TranslationProvider,
};

/// Test the local stub's translation output
#[tokio::test]
async fn test_localProvider_translate_shouldReturnMarkedUpText() {
    let provider = LocalTranslationProvider::new(&LocalConfig::default());
    let translated = provider.translate("Hello", "en", "es").await.unwrap();
    assert_eq!(translated, "[Translated: Hello]");
    assert_eq!(provider.name(), "LocalTranslationProvider");
}

/// Test batch translation through a trait object, the way the service
/// dispatches it
#[tokio::test]
async fn test_providerAsTraitObject_batchTranslate_shouldPreserveIndexOrder() {
    let provider: Box<dyn TranslationProvider> =
        Box::new(LocalTranslationProvider::new(&LocalConfig::default()));
    let texts: Vec<String> = ["one", "two", "three"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let translated = provider.translate_batch(&texts, "en", "de").await.unwrap();

    assert_eq!(translated.len(), texts.len());
    for (original, result) in texts.iter().zip(&translated) {
        assert_eq!(result, &format!("[Translated: {}]", original));
    }
}

/// Per-provider language pair policy is intentionally divergent: the
/// remote API forwards any two distinct two-letter codes, the
/// catalog-backed providers only accept known codes
#[test]
fn test_languagePairPolicy_shouldDivergeByProviderFamily() {
    let remote = RemoteTranslationProvider::new(&RemoteConfig::default());
    let llm = LlmTranslationProvider::new(&LlmConfig::default());
    let local = LocalTranslationProvider::new(&LocalConfig::default());

    // Outside the common catalog
    assert!(remote.validate_language_pair("sv", "fi"));
    assert!(!llm.validate_language_pair("sv", "fi"));
    assert!(!local.validate_language_pair("sv", "fi"));

    // Same pair is rejected everywhere
    assert!(!remote.validate_language_pair("en", "en"));
    assert!(!llm.validate_language_pair("en", "en"));
    assert!(!local.validate_language_pair("en", "en"));

    // Catalog members pass everywhere
    assert!(remote.validate_language_pair("en", "es"));
    assert!(llm.validate_language_pair("en", "es"));
    assert!(local.validate_language_pair("en", "es"));
}

/// Each supported_languages call must return an independent copy
#[test]
fn test_supportedLanguages_shouldReturnIndependentCopies() {
    let provider = LocalTranslationProvider::new(&LocalConfig::default());

    let mut first = provider.supported_languages();
    first.clear();

    let second = provider.supported_languages();
    assert_eq!(second.len(), 12);
    assert_eq!(second.get("en").map(String::as_str), Some("English"));
}

/// Health check must swallow provider failures into `false`
#[tokio::test]
async fn test_healthCheck_withFailingBackend_shouldReturnFalse() {
    let provider = MockProvider::failing();
    assert!(!provider.health_check().await);

    let provider = MockProvider::working();
    assert!(provider.health_check().await);
}

/// The LLM provider rejects the pair before touching the network
#[tokio::test]
async fn test_llmProvider_withUnknownCodes_shouldFailWithInvalidPair() {
    let provider = LlmTranslationProvider::new(&LlmConfig::default());
    let result = provider.translate("Hej", "sv", "fi").await;
    assert!(matches!(
        result,
        Err(TranslationError::InvalidLanguagePair { .. })
    ));
}

/// Provider names are stable identifiers
#[test]
fn test_providerNames_shouldBeStable() {
    assert_eq!(
        RemoteTranslationProvider::new(&RemoteConfig::default()).name(),
        "RemoteTranslationProvider"
    );
    assert_eq!(
        LlmTranslationProvider::new(&LlmConfig::default()).name(),
        "LlmTranslationProvider"
    );
    assert_eq!(
        LocalTranslationProvider::new(&LocalConfig::default()).name(),
        "LocalTranslationProvider"
    );
}
